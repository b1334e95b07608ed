/// Lifecycle of one in-flight fetch.
///
/// A fresh screen starts in `Fetching` so the spinner shows before the
/// first response lands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Fetching,
    Success,
    Error,
}

impl FetchStatus {
    pub fn is_fetching(self) -> bool {
        self == Self::Fetching
    }

    pub fn is_error(self) -> bool {
        self == Self::Error
    }

    /// Reduces two statuses to the one the screen should display.
    ///
    /// Any error wins; otherwise any pending fetch keeps the spinner up;
    /// only when every source succeeded is the combination a success.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Error, _) | (_, Self::Error) => Self::Error,
            (Self::Fetching, _) | (_, Self::Fetching) => Self::Fetching,
            (Self::Success, Self::Success) => Self::Success,
        }
    }

    /// Combined status over any number of sources, `Success` when empty.
    pub fn combine_all(statuses: impl IntoIterator<Item = Self>) -> Self {
        statuses
            .into_iter()
            .fold(Self::Success, Self::combine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_dominates_combination() {
        assert_eq!(
            FetchStatus::Error.combine(FetchStatus::Success),
            FetchStatus::Error
        );
        assert_eq!(
            FetchStatus::Fetching.combine(FetchStatus::Error),
            FetchStatus::Error
        );
    }

    #[test]
    fn fetching_beats_success() {
        assert_eq!(
            FetchStatus::Success.combine(FetchStatus::Fetching),
            FetchStatus::Fetching
        );
    }

    #[test]
    fn combine_all_over_lookups() {
        let all = [
            FetchStatus::Success,
            FetchStatus::Success,
            FetchStatus::Fetching,
        ];
        assert_eq!(FetchStatus::combine_all(all), FetchStatus::Fetching);
        assert_eq!(FetchStatus::combine_all([]), FetchStatus::Success);
    }
}
