//! Page math and the page-control strip.

/// Rows per page, drawn from a fixed enumerated set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Five,
    Ten,
    TwentyFive,
    Fifty,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Five,
        PageSize::Ten,
        PageSize::TwentyFive,
        PageSize::Fifty,
    ];

    pub const fn rows(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
        }
    }

    /// The next option in the fixed set, wrapping around.
    pub const fn cycle(self) -> Self {
        match self {
            PageSize::Five => PageSize::Ten,
            PageSize::Ten => PageSize::TwentyFive,
            PageSize::TwentyFive => PageSize::Fifty,
            PageSize::Fifty => PageSize::Five,
        }
    }
}

/// Number of pages for a filtered row count, never less than one: an
/// empty result still has a (blank) page zero.
pub fn page_count(filtered: usize, page_size: PageSize) -> usize {
    filtered.div_ceil(page_size.rows()).max(1)
}

/// One element of the numbered page-control strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerControl {
    /// A numbered button for a zero-based page index.
    Page(usize),
    Ellipsis,
}

/// Build the control strip for the current page.
///
/// Up to five pages every page gets a button. Beyond that the strip keeps
/// the first page, the neighborhood of the current page, and the last
/// page, collapsing each gap into a single ellipsis. Built from the
/// ordered candidate set so boundary pages never produce duplicate or
/// overlapping buttons.
pub fn controls(page: usize, page_count: usize) -> Vec<PagerControl> {
    let last = page_count.saturating_sub(1);

    if page_count <= 5 {
        return (0..page_count).map(PagerControl::Page).collect();
    }

    let mut wanted = vec![0, page.saturating_sub(1), page, (page + 1).min(last), last];
    wanted.sort_unstable();
    wanted.dedup();

    let mut strip = Vec::with_capacity(wanted.len() + 2);
    let mut previous: Option<usize> = None;
    for index in wanted {
        if let Some(prev) = previous
            && index > prev + 1
        {
            strip.push(PagerControl::Ellipsis);
        }
        strip.push(PagerControl::Page(index));
        previous = Some(index);
    }
    strip
}
