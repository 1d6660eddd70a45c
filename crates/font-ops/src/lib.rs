//! Generic font table manipulation utilities.

use anyhow::Result;
use read_fonts::{FontRef, TableProvider};
use write_fonts::{
    FontBuilder,
    tables::name::{Name, NameRecord},
};

/// Name table ID of the version string ("Version 2.040;GOOG;...").
pub const NAME_ID_VERSION: u16 = 5;

/// Rewrite font data by applying a transformation function.
///
/// Copies all tables from the source font, then calls `f` to modify or add
/// tables. The function receives a reference to the source font and a mutable
/// builder that already contains all original tables.
pub fn rewrite_font(
    data: &[u8],
    f: impl FnOnce(&FontRef, &mut FontBuilder) -> Result<()>,
) -> Result<Vec<u8>> {
    let font = FontRef::new(data)?;
    let mut builder = FontBuilder::new();

    for record in font.table_directory.table_records() {
        let tag = record.tag();
        if let Some(table_data) = font.table_data(tag) {
            builder.add_raw(tag, table_data);
        }
    }

    f(&font, &mut builder)?;
    Ok(builder.build())
}

/// Map name table records using a transformation function.
///
/// The mapper receives `(name_id, current_string)` and returns:
/// - `Some(new_string)` to replace the record's string
/// - `None` to keep the current string unchanged
pub fn map_name_records(
    font: &FontRef,
    mut mapper: impl FnMut(u16, &str) -> Option<String>,
) -> Result<Name> {
    let name = font.name()?;
    let mut new_records = Vec::new();

    for record in name.name_record() {
        let name_id = record.name_id().to_u16();
        let current = match record.string(name.string_data()) {
            Ok(s) => s.chars().collect::<String>(),
            Err(_) => continue,
        };

        let new_string = mapper(name_id, &current).unwrap_or(current);

        new_records.push(NameRecord::new(
            record.platform_id(),
            record.encoding_id(),
            record.language_id(),
            read_fonts::types::NameId::new(name_id),
            new_string.into(),
        ));
    }

    Ok(Name::new(new_records))
}

/// Fetch the first name table record with the given ID, decoded to a string.
///
/// Returns `Ok(None)` when the font carries no such record.
pub fn name_record(font: &FontRef, name_id: u16) -> Result<Option<String>> {
    let name = font.name()?;
    for record in name.name_record() {
        if record.name_id().to_u16() != name_id {
            continue;
        }
        if let Ok(s) = record.string(name.string_data()) {
            return Ok(Some(s.chars().collect()));
        }
    }
    Ok(None)
}

/// Render the head table's fontRevision with a fixed number of decimal
/// places, the way version strings print it.
pub fn printable_revision(font: &FontRef, places: usize) -> Result<String> {
    let revision = font.head()?.font_revision();
    Ok(format!("{:.*}", places, revision.to_f64()))
}
