//! Structural grouping validation

use crate::core::{GROUP_SIZE, GroupColor, Grouping};

/// Check that no color holds a partial group
///
/// Every color must hold either no words or exactly a full group.
///
/// # Examples
/// ```
/// use connections_plus::core::{GroupColor, Grouping};
/// use connections_plus::rules::validate_grouping;
///
/// assert!(validate_grouping(&Grouping::new()));
///
/// let partial = Grouping::new().with_group(GroupColor::Green, ["INDEX", "PREFACE"]);
/// assert!(!validate_grouping(&partial));
/// ```
#[must_use]
pub fn validate_grouping(grouping: &Grouping) -> bool {
    first_partial_group(grouping).is_none()
}

/// First color (in color order) holding between 1 and 3 words
#[must_use]
pub fn first_partial_group(grouping: &Grouping) -> Option<(GroupColor, usize)> {
    GroupColor::ALL
        .into_iter()
        .map(|color| (color, grouping.count(color)))
        .find(|&(_, count)| count != 0 && count != GROUP_SIZE)
}
