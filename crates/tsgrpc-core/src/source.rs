//! Source comments attached to schema entities

use prost_types::SourceCodeInfo;
use prost_types::source_code_info::Location;
use std::collections::HashMap;

// Field numbers used to address descriptor elements in `SourceCodeInfo` paths.
pub(crate) const FILE_SERVICE: i32 = 6;
pub(crate) const FILE_SYNTAX: i32 = 12;
pub(crate) const SERVICE_METHOD: i32 = 2;

/// Raw comments recorded by the schema compiler for one element
///
/// Comment text is kept exactly as the compiler reports it: comment markers stripped, one
/// newline-terminated line per source line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceComments {
    /// Block directly above the element
    pub leading: Option<String>,

    /// Block directly after the element on the same or next line
    pub trailing: Option<String>,

    /// Blocks above the element separated from it by blank lines
    pub leading_detached: Vec<String>,
}

impl SourceComments {
    /// Check if no comment of any kind is present
    pub fn is_empty(&self) -> bool {
        self.leading.is_none() && self.trailing.is_none() && self.leading_detached.is_empty()
    }

    fn from_location(location: &Location) -> Self {
        Self {
            leading: location.leading_comments.clone(),
            trailing: location.trailing_comments.clone(),
            leading_detached: location.leading_detached_comments.clone(),
        }
    }
}

/// Lookup of locations by element path within one file
pub(crate) struct SourceIndex<'a> {
    locations: HashMap<&'a [i32], &'a Location>,
}

impl<'a> SourceIndex<'a> {
    pub(crate) fn new(info: Option<&'a SourceCodeInfo>) -> Self {
        let mut locations = HashMap::new();
        if let Some(info) = info {
            for location in &info.location {
                // First location wins; later ones for the same path carry no comments.
                locations
                    .entry(location.path.as_slice())
                    .or_insert(location);
            }
        }
        Self { locations }
    }

    /// Comments for the element at `path`, if any were recorded
    pub(crate) fn comments(&self, path: &[i32]) -> Option<SourceComments> {
        self.locations
            .get(path)
            .map(|location| SourceComments::from_location(location))
            .filter(|comments| !comments.is_empty())
    }
}
