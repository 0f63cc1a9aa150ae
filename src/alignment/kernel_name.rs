use super::{AlignError, Missing};
use std::{fmt, str::FromStr};

/// The alignment regime: which boundary cells are free and which cells may
/// end the alignment.
///
/// The semi-global suffixes name free end gaps: `qb`/`qe` for the beginning
/// and end of the query, `db`/`de` for the beginning and end of the reference
/// (database) sequence, and `x` for both ends.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub enum Regime {
    Nw,
    Sw,
    Sg,
    SgQb,
    SgQe,
    SgQx,
    SgDb,
    SgDe,
    SgDx,
    SgQbDe,
    SgQeDb,
    SgQbDb,
    SgQeDe,
}

impl Regime {
    pub const ALL: [Regime; 13] = [
        Regime::Nw,
        Regime::Sw,
        Regime::Sg,
        Regime::SgQb,
        Regime::SgQe,
        Regime::SgQx,
        Regime::SgDb,
        Regime::SgDe,
        Regime::SgDx,
        Regime::SgQbDe,
        Regime::SgQeDb,
        Regime::SgQbDb,
        Regime::SgQeDe,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Regime::Nw => "nw",
            Regime::Sw => "sw",
            Regime::Sg => "sg",
            Regime::SgQb => "sg_qb",
            Regime::SgQe => "sg_qe",
            Regime::SgQx => "sg_qx",
            Regime::SgDb => "sg_db",
            Regime::SgDe => "sg_de",
            Regime::SgDx => "sg_dx",
            Regime::SgQbDe => "sg_qb_de",
            Regime::SgQeDb => "sg_qe_db",
            Regime::SgQbDb => "sg_qb_db",
            Regime::SgQeDe => "sg_qe_de",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_local(self) -> bool {
        matches!(self, Regime::Sw)
    }

    #[inline]
    #[must_use]
    pub const fn is_global(self) -> bool {
        matches!(self, Regime::Nw)
    }

    #[inline]
    #[must_use]
    pub const fn is_semi_global(self) -> bool {
        !self.is_local() && !self.is_global()
    }

    /// A free query beginning: row zero of the matrix costs nothing, so a
    /// reference prefix may be skipped.
    #[inline]
    #[must_use]
    pub const fn query_begin_free(self) -> bool {
        matches!(
            self,
            Regime::Sg | Regime::SgQb | Regime::SgQx | Regime::SgQbDe | Regime::SgQbDb
        )
    }

    /// A free query end: the alignment may end anywhere in the last row.
    #[inline]
    #[must_use]
    pub const fn query_end_free(self) -> bool {
        matches!(
            self,
            Regime::Sg | Regime::SgQe | Regime::SgQx | Regime::SgQeDb | Regime::SgQeDe
        )
    }

    /// A free reference beginning: column zero costs nothing, so a query
    /// prefix may be skipped.
    #[inline]
    #[must_use]
    pub const fn ref_begin_free(self) -> bool {
        matches!(
            self,
            Regime::Sg | Regime::SgDb | Regime::SgDx | Regime::SgQeDb | Regime::SgQbDb
        )
    }

    /// A free reference end: the alignment may end anywhere in the last
    /// column.
    #[inline]
    #[must_use]
    pub const fn ref_end_free(self) -> bool {
        matches!(
            self,
            Regime::Sg | Regime::SgDe | Regime::SgDx | Regime::SgQbDe | Regime::SgQeDe
        )
    }
}

/// What a kernel keeps besides the score and end coordinates.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub enum Storage {
    #[default]
    Plain,
    Table,
    Rowcol,
    Trace,
    Stats,
    StatsTable,
    StatsRowcol,
}

impl Storage {
    pub const ALL: [Storage; 7] = [
        Storage::Plain,
        Storage::Table,
        Storage::Rowcol,
        Storage::Trace,
        Storage::Stats,
        Storage::StatsTable,
        Storage::StatsRowcol,
    ];

    #[inline]
    #[must_use]
    pub const fn has_stats(self) -> bool {
        matches!(self, Storage::Stats | Storage::StatsTable | Storage::StatsRowcol)
    }

    #[inline]
    #[must_use]
    pub const fn has_table(self) -> bool {
        matches!(self, Storage::Table | Storage::StatsTable)
    }

    #[inline]
    #[must_use]
    pub const fn has_rowcol(self) -> bool {
        matches!(self, Storage::Rowcol | Storage::StatsRowcol)
    }

    #[inline]
    #[must_use]
    pub const fn has_trace(self) -> bool {
        matches!(self, Storage::Trace)
    }

    /// Whether the kernel has to report every cell.
    #[inline]
    #[must_use]
    pub const fn records_cells(self) -> bool {
        !matches!(self, Storage::Plain)
    }

    /// The `_`-separated name fragments, empty for [`Storage::Plain`].
    const fn fragments(self) -> &'static str {
        match self {
            Storage::Plain => "",
            Storage::Table => "_table",
            Storage::Rowcol => "_rowcol",
            Storage::Trace => "_trace",
            Storage::Stats => "_stats",
            Storage::StatsTable => "_stats_table",
            Storage::StatsRowcol => "_stats_rowcol",
        }
    }
}

/// The order in which a kernel visits the cells.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub enum Layout {
    /// One cell at a time in 64-bit arithmetic; the reference for the others.
    #[default]
    Serial,
    /// Farrar's striped query layout with a prefix scan for the vertical gaps.
    Scan,
    /// Farrar's striped query layout with the lazy vertical-gap correction.
    Striped,
    /// Vectors along the anti-diagonals.
    Diag,
}

impl Layout {
    pub const ALL: [Layout; 4] = [Layout::Serial, Layout::Scan, Layout::Striped, Layout::Diag];

    #[inline]
    #[must_use]
    pub const fn is_simd(self) -> bool {
        !matches!(self, Layout::Serial)
    }

    const fn fragment(self) -> &'static str {
        match self {
            Layout::Serial => "",
            Layout::Scan => "_scan",
            Layout::Striped => "_striped",
            Layout::Diag => "_diag",
        }
    }
}

/// The lane width of a vectorized kernel, or the saturation-checked cascade
/// from 8 to 64 bits.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub enum Width {
    W8,
    W16,
    W32,
    W64,
    Sat,
}

impl Width {
    pub const ALL: [Width; 5] = [Width::W8, Width::W16, Width::W32, Width::W64, Width::Sat];

    /// The next wider fixed width, used by the saturation cascade.
    #[inline]
    #[must_use]
    pub const fn wider(self) -> Option<Width> {
        match self {
            Width::W8 => Some(Width::W16),
            Width::W16 => Some(Width::W32),
            Width::W32 => Some(Width::W64),
            Width::W64 | Width::Sat => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Width::W8 => "8",
            Width::W16 => "16",
            Width::W32 => "32",
            Width::W64 => "64",
            Width::Sat => "sat",
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point in the kernel axis product: regime × storage × layout × width.
///
/// Kernel names follow `<regime>[_stats][_table|_rowcol|_trace][_scan|_striped|_diag][_<width>]`,
/// for example `sw_trace_striped_16` or `sg_qb_de_stats_rowcol_scan_sat`. The
/// serial layout has no width suffix and every vectorized layout requires one.
///
/// ```
/// # use pairalign::alignment::{KernelSpec, Layout, Regime, Storage, Width};
/// let spec: KernelSpec = "sg_qb_de_stats_table_diag_sat".parse().unwrap();
/// assert_eq!(spec.regime, Regime::SgQbDe);
/// assert_eq!(spec.storage, Storage::StatsTable);
/// assert_eq!(spec.layout, Layout::Diag);
/// assert_eq!(spec.width, Some(Width::Sat));
/// assert_eq!(spec.to_string(), "sg_qb_de_stats_table_diag_sat");
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub struct KernelSpec {
    pub regime:  Regime,
    pub storage: Storage,
    pub layout:  Layout,
    pub width:   Option<Width>,
}

impl KernelSpec {
    /// A serial kernel.
    #[inline]
    #[must_use]
    pub const fn serial(regime: Regime, storage: Storage) -> Self {
        KernelSpec {
            regime,
            storage,
            layout: Layout::Serial,
            width: None,
        }
    }

    /// A vectorized kernel.
    #[inline]
    #[must_use]
    pub const fn simd(regime: Regime, storage: Storage, layout: Layout, width: Width) -> Self {
        KernelSpec {
            regime,
            storage,
            layout,
            width: Some(width),
        }
    }

    /// Whether the combination names a kernel: the serial layout takes no
    /// width and the vectorized layouts need one.
    #[inline]
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.layout.is_simd() == self.width.is_some()
    }

    /// Every valid kernel, in a stable order.
    pub fn all() -> impl Iterator<Item = KernelSpec> {
        Regime::ALL.into_iter().flat_map(|regime| {
            Storage::ALL.into_iter().flat_map(move |storage| {
                std::iter::once(KernelSpec::serial(regime, storage)).chain(
                    [Layout::Scan, Layout::Striped, Layout::Diag]
                        .into_iter()
                        .flat_map(move |layout| {
                            Width::ALL
                                .into_iter()
                                .map(move |width| KernelSpec::simd(regime, storage, layout, width))
                        }),
                )
            })
        })
    }
}

impl fmt::Display for KernelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        KernelName {
            spec:    *self,
            profile: false,
        }
        .fmt(f)
    }
}

impl FromStr for KernelSpec {
    type Err = AlignError;

    /// Parses a kernel name without the `_profile` marker.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<KernelName>()? {
            KernelName { spec, profile: false } => Ok(spec),
            KernelName { profile: true, .. } => Err(AlignError::NotFound(Missing::Kernel(s.to_string()))),
        }
    }
}

/// A full kernel name: a [`KernelSpec`] plus whether the kernel consumes a
/// prebuilt [`Profile`](super::Profile), marked by `_profile` before the
/// width.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct KernelName {
    pub spec:    KernelSpec,
    pub profile: bool,
}

impl fmt::Display for KernelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let KernelSpec {
            regime,
            storage,
            layout,
            width,
        } = self.spec;
        write!(
            f,
            "{regime}{storage}{layout}",
            regime = regime.as_str(),
            storage = storage.fragments(),
            layout = layout.fragment()
        )?;
        if self.profile {
            f.write_str("_profile")?;
        }
        if let Some(width) = width {
            write!(f, "_{width}")?;
        }
        Ok(())
    }
}

impl FromStr for KernelName {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let not_found = || AlignError::NotFound(Missing::Kernel(s.to_string()));

        // The longest regime name that is a whole-token prefix
        let (regime, rest) = Regime::ALL
            .iter()
            .filter_map(|&r| {
                let rest = s.strip_prefix(r.as_str())?;
                (rest.is_empty() || rest.starts_with('_')).then_some((r, rest))
            })
            .max_by_key(|(r, _)| r.as_str().len())
            .ok_or_else(not_found)?;

        let mut tokens = rest.split('_').skip(1).peekable();

        let stats = tokens.next_if_eq(&"stats").is_some();
        let storage = match (stats, tokens.peek().copied()) {
            (false, Some("table")) => Some(Storage::Table),
            (false, Some("rowcol")) => Some(Storage::Rowcol),
            (false, Some("trace")) => Some(Storage::Trace),
            (true, Some("table")) => Some(Storage::StatsTable),
            (true, Some("rowcol")) => Some(Storage::StatsRowcol),
            _ => None,
        };
        let storage = match storage {
            Some(storage) => {
                tokens.next();
                storage
            }
            None if stats => Storage::Stats,
            None => Storage::Plain,
        };

        let layout = match tokens.peek().copied() {
            Some("scan") => Some(Layout::Scan),
            Some("striped") => Some(Layout::Striped),
            Some("diag") => Some(Layout::Diag),
            _ => None,
        };
        let layout = match layout {
            Some(layout) => {
                tokens.next();
                layout
            }
            None => Layout::Serial,
        };

        let profile = tokens.next_if_eq(&"profile").is_some();

        let width = match tokens.next() {
            None => None,
            Some("8") => Some(Width::W8),
            Some("16") => Some(Width::W16),
            Some("32") => Some(Width::W32),
            Some("64") => Some(Width::W64),
            Some("sat") => Some(Width::Sat),
            Some(_) => return Err(not_found()),
        };

        let spec = KernelSpec {
            regime,
            storage,
            layout,
            width,
        };

        if tokens.next().is_some() || !spec.is_valid() {
            return Err(not_found());
        }

        Ok(KernelName { spec, profile })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_names() {
        let spec: KernelSpec = "sw".parse().unwrap();
        assert_eq!(spec, KernelSpec::serial(Regime::Sw, Storage::Plain));

        let spec: KernelSpec = "sw_trace_striped_16".parse().unwrap();
        assert_eq!(
            spec,
            KernelSpec::simd(Regime::Sw, Storage::Trace, Layout::Striped, Width::W16)
        );

        let spec: KernelSpec = "sg_qe_db_stats".parse().unwrap();
        assert_eq!(spec, KernelSpec::serial(Regime::SgQeDb, Storage::Stats));

        let spec: KernelSpec = "sg_stats_rowcol_scan_sat".parse().unwrap();
        assert_eq!(
            spec,
            KernelSpec::simd(Regime::Sg, Storage::StatsRowcol, Layout::Scan, Width::Sat)
        );

        let name: KernelName = "nw_table_scan_profile_32".parse().unwrap();
        assert!(name.profile);
        assert_eq!(name.spec.storage, Storage::Table);
        assert_eq!(name.to_string(), "nw_table_scan_profile_32");
    }

    #[test]
    fn reject_names() {
        for name in [
            "",
            "xx",
            "nwx",
            "sw_striped",
            "sw_16",
            "sw_stats_trace",
            "sw_blocked_16",
            "sw_striped_12",
            "sw_striped_16_extra",
            "sg_qz",
            "sw_table_stats",
        ] {
            assert!(
                matches!(name.parse::<KernelName>(), Err(AlignError::NotFound(Missing::Kernel(_)))),
                "{name}"
            );
        }
        assert!("sw_striped_profile_8".parse::<KernelSpec>().is_err());
    }

    #[test]
    fn every_name_round_trips() {
        let mut count = 0;
        for spec in KernelSpec::all() {
            assert_eq!(spec.to_string().parse::<KernelSpec>().unwrap(), spec);
            let name = KernelName { spec, profile: true };
            assert_eq!(name.to_string().parse::<KernelName>().unwrap(), name);
            count += 1;
        }
        assert_eq!(count, 13 * 7 * (1 + 3 * 5));
    }

    #[test]
    fn regime_edges() {
        assert!(Regime::Sg.query_begin_free() && Regime::Sg.ref_end_free());
        assert!(Regime::SgQbDe.query_begin_free() && Regime::SgQbDe.ref_end_free());
        assert!(!Regime::SgQbDe.query_end_free() && !Regime::SgQbDe.ref_begin_free());
        assert!(!Regime::Nw.query_begin_free() && !Regime::Sw.query_end_free());
        assert!(Regime::SgDx.ref_begin_free() && Regime::SgDx.ref_end_free());
        assert!(Regime::SgQx.is_semi_global());
    }
}
