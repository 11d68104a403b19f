/// A fire-and-forget command for the native list view.
///
/// Commands are dispatched in the exact order the corresponding mutations
/// occurred; the native layer relies on that ordering to animate and recycle
/// view holders without tearing. No acknowledgment is awaited.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewCommand {
    ScrollToIndex {
        animated: bool,
        index: usize,
        velocity: Option<f32>,
        view_position: Option<f32>,
        view_offset: Option<f32>,
    },
    CompleteRefresh,
    CompleteLoadMore,
    ItemRangeInserted {
        position: usize,
        count: usize,
    },
    ItemRangeRemoved {
        position: usize,
        count: usize,
    },
    ItemMoved {
        from: usize,
        to: usize,
    },
    DataSetChanged {
        item_count: usize,
    },
}

/// State of the pull-to-refresh / load-more layer.
///
/// The raw values are the wire representation consumed by the refresh-layer
/// collaborator; [`RefreshState::name`] maps them to the named states at that
/// boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum RefreshState {
    #[default]
    Idle = 0,
    HeaderRefreshing = 1,
    FooterRefreshing = 2,
    NoMoreData = 3,
    Failure = 4,
    FirstLoad = 5,
    PreLoad = 6,
}

impl RefreshState {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Idle),
            1 => Some(Self::HeaderRefreshing),
            2 => Some(Self::FooterRefreshing),
            3 => Some(Self::NoMoreData),
            4 => Some(Self::Failure),
            5 => Some(Self::FirstLoad),
            6 => Some(Self::PreLoad),
            _ => None,
        }
    }

    pub fn as_raw(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::HeaderRefreshing => "HeaderRefreshing",
            Self::FooterRefreshing => "FooterRefreshing",
            Self::NoMoreData => "NoMoreData",
            Self::Failure => "Failure",
            Self::FirstLoad => "FirstLoad",
            Self::PreLoad => "PreLoad",
        }
    }
}
