//! Records Query State
//!
//! Paging, sorting and search parameters shared by the probe request and
//! the page request. Any change other than moving between pages resets
//! the page index to 0.

use crate::models::Record;

/// Selectable page sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Ten,
    Twenty,
    Thirty,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 5] = [
        PageSize::Ten,
        PageSize::Twenty,
        PageSize::Thirty,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    pub fn get(&self) -> u32 {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Thirty => 30,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }

    pub fn from_u32(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.get() == value)
    }
}

/// Column the backend sorts by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Id,
    Operation,
    Amount,
    Date,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::Id,
        SortField::Operation,
        SortField::Amount,
        SortField::Date,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Operation => "operation",
            SortField::Amount => "amount",
            SortField::Date => "date",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::Id => "ID",
            SortField::Operation => "Operation",
            SortField::Amount => "Amount",
            SortField::Date => "Date",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Current records query
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    pub page: u32,
    pub size: PageSize,
    pub sort_by: SortField,
    pub direction: SortDirection,
    pub search: String,
}

impl QueryState {
    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 0;
    }

    pub fn set_size(&mut self, size: PageSize) {
        self.size = size;
        self.page = 0;
    }

    pub fn set_sort_by(&mut self, sort_by: SortField) {
        self.sort_by = sort_by;
        self.page = 0;
    }

    pub fn set_direction(&mut self, direction: SortDirection) {
        self.direction = direction;
        self.page = 0;
    }

    pub fn next_page(&mut self) {
        self.page += 1;
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }
}

/// One user action on the records query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryChange {
    Search(String),
    Size(PageSize),
    SortBy(SortField),
    Direction(SortDirection),
    NextPage,
    PreviousPage,
}

impl QueryChange {
    pub fn apply(self, query: &mut QueryState) {
        match self {
            QueryChange::Search(search) => query.set_search(search),
            QueryChange::Size(size) => query.set_size(size),
            QueryChange::SortBy(sort_by) => query.set_sort_by(sort_by),
            QueryChange::Direction(direction) => query.set_direction(direction),
            QueryChange::NextPage => query.next_page(),
            QueryChange::PreviousPage => query.previous_page(),
        }
    }
}

/// `ceil(probe_count / size)`
pub fn total_pages(probe_count: usize, size: PageSize) -> u32 {
    let size = size.get() as usize;
    probe_count.div_ceil(size) as u32
}

pub fn previous_disabled(page: u32) -> bool {
    page == 0
}

/// Also disabled when there are no pages at all
pub fn next_disabled(page: u32, total_pages: u32) -> bool {
    page + 1 >= total_pages
}

/// Drop exactly the record with `id`, keeping order
pub fn remove_record(records: &mut Vec<Record>, id: u64) {
    records.retain(|record| record.id != id);
}
