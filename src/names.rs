//! Named colors. The conversions themselves don't care where names come from: anything that can turn
//! a name into RGB implements [`NameLookup`], and [`Color::new_named`](crate::color::Color::new_named)
//! takes one of those.
//!
//! [`NameTable`] is the implementation that ships with the crate. It reads a two-column CSV file
//! (`name,hex`) with one color per row, and [`NameTable::basic`] is a copy of the sixteen basic HTML
//! colors built in at compile time.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use crate::colors::rgbcolor::rgbhex_to_rgb;
use crate::error::Result;
use crate::linalg::Color3;

/// Something that can find the RGB of a color by name. Lookups should ignore case.
pub trait NameLookup {
    /// The gamma-encoded RGB of `name`, or `None` if the name isn't known.
    fn lookup(&self, name: &str) -> Option<Color3>;
}

impl<S: ::std::hash::BuildHasher> NameLookup for HashMap<String, Color3, S> {
    /// Looks the name up as given, then lowercased.
    fn lookup(&self, name: &str) -> Option<Color3> {
        self.get(name)
            .or_else(|| self.get(&name.to_lowercase()))
            .cloned()
    }
}

#[derive(Debug, Deserialize)]
struct Record {
    name: String,
    hex: String,
}

/// A table of named colors read from CSV. Names are stored lowercased.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameTable {
    colors: HashMap<String, Color3>,
}

lazy_static! {
    static ref BASIC_COLORS: NameTable =
        // this table is ours, so a parse failure is a bug, not a runtime condition
        NameTable::from_reader(include_str!("../data/basic_colors.csv").as_bytes())
            .expect("built-in color table is valid");
}

impl NameTable {
    /// Reads a table from CSV with a `name,hex` header.
    /// # Errors
    /// Returns [`Error::NameTable`](crate::error::Error::NameTable) if the CSV is malformed and
    /// [`Error::InvalidHex`](crate::error::Error::InvalidHex) if a row's color doesn't parse.
    /// # Example
    /// ```
    /// # use vermilion::names::{NameLookup, NameTable};
    /// let csv = "name,hex\nVermilion,#E34234\n";
    /// let table = NameTable::from_reader(csv.as_bytes()).unwrap();
    /// assert!(table.lookup("VERMILION").is_some());
    /// assert!(NameTable::from_reader("name,hex\nbad,#12\n".as_bytes()).is_err());
    /// ```
    pub fn from_reader<R: io::Read>(rdr: R) -> Result<NameTable> {
        NameTable::collect(csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr))
    }

    /// Reads a table from a CSV file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<NameTable> {
        NameTable::collect(csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?)
    }

    fn collect<R: io::Read>(mut reader: csv::Reader<R>) -> Result<NameTable> {
        let mut colors = HashMap::new();
        for result in reader.deserialize() {
            let record: Record = result?;
            colors.insert(record.name.to_lowercase(), rgbhex_to_rgb(&record.hex)?);
        }
        Ok(NameTable { colors })
    }

    /// The sixteen basic HTML colors.
    pub fn basic() -> &'static NameTable {
        &BASIC_COLORS
    }

    /// The number of names in the table.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the table has no names.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Every name in the table, lowercased and sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.colors.keys().map(String::as_str).collect();
        names.sort();
        names
    }
}

impl NameLookup for NameTable {
    fn lookup(&self, name: &str) -> Option<Color3> {
        self.colors.get(&name.trim().to_lowercase()).cloned()
    }
}
