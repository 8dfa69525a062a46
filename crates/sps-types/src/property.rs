//! Informational names for well-known numeric property keys.
//!
//! Property keys only mean something relative to their set's format class,
//! and even then an entry type is paired with the value type it is
//! conventionally stored as. The tables below cover the summary and
//! document-summary classes; everything else is unnamed.

use crate::format_class::FormatClass;

/// A named property: symbolic identifier plus a human description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyName {
  pub identifier: &'static str,
  pub description: &'static str,
  /// Entry type (property id) this name applies to.
  pub entry_type: u32,
  /// Value-type code the property is conventionally stored as.
  pub value_type: u16,
}

const fn prop(
  entry_type: u32,
  value_type: u16,
  identifier: &'static str,
  description: &'static str,
) -> PropertyName {
  PropertyName {
    identifier,
    description,
    entry_type,
    value_type,
  }
}

const SUMMARY_INFORMATION: &[PropertyName] = &[
  prop(0x0001, 0x0002, "PIDSI_CODEPAGE", "Codepage"),
  prop(0x0002, 0x001E, "PIDSI_TITLE", "Title"),
  prop(0x0003, 0x001E, "PIDSI_SUBJECT", "Subject"),
  prop(0x0004, 0x001E, "PIDSI_AUTHOR", "Author"),
  prop(0x0005, 0x001E, "PIDSI_KEYWORDS", "Keywords"),
  prop(0x0006, 0x001E, "PIDSI_COMMENTS", "Comments"),
  prop(0x0007, 0x001E, "PIDSI_TEMPLATE", "Template"),
  prop(0x0008, 0x001E, "PIDSI_LASTAUTHOR", "Last saved by"),
  prop(0x0009, 0x001E, "PIDSI_REVNUMBER", "Revision number"),
  prop(0x000A, 0x0040, "PIDSI_EDITTIME", "Total editing time"),
  prop(0x000B, 0x0040, "PIDSI_LASTPRINTED", "Last printed date and time"),
  prop(0x000C, 0x0040, "PIDSI_CREATE_DTM", "Creation date and time"),
  prop(0x000D, 0x0040, "PIDSI_LASTSAVE_DTM", "Last saved date and time"),
  prop(0x000E, 0x0003, "PIDSI_PAGECOUNT", "Number of pages"),
  prop(0x000F, 0x0003, "PIDSI_WORDCOUNT", "Number of words"),
  prop(0x0010, 0x0003, "PIDSI_CHARCOUNT", "Number of characters"),
  prop(0x0011, 0x0047, "PIDSI_THUMBNAIL", "Thumbnail"),
  prop(0x0012, 0x001E, "PIDSI_APPNAME", "Creating application name"),
  prop(0x0013, 0x0003, "PIDSI_SECURITY", "Security"),
];

const DOCUMENT_SUMMARY_INFORMATION: &[PropertyName] = &[
  prop(0x0001, 0x0002, "PIDDSI_CODEPAGE", "Codepage"),
  prop(0x0002, 0x001E, "PIDDSI_CATEGORY", "Category"),
  prop(0x0003, 0x001E, "PIDDSI_PRESFORMAT", "Presentation format"),
  prop(0x0004, 0x0003, "PIDDSI_BYTECOUNT", "Number of bytes"),
  prop(0x0005, 0x0003, "PIDDSI_LINECOUNT", "Number of lines"),
  prop(0x0006, 0x0003, "PIDDSI_PARCOUNT", "Number of paragraphs"),
  prop(0x0007, 0x0003, "PIDDSI_SLIDECOUNT", "Number of slides"),
  prop(0x0008, 0x0003, "PIDDSI_NOTECOUNT", "Number of notes"),
  prop(0x0009, 0x0003, "PIDDSI_HIDDENCOUNT", "Number of hidden slides"),
  prop(0x000A, 0x0003, "PIDDSI_MMCLIPCOUNT", "Number of multimedia clips"),
  prop(0x000B, 0x000B, "PIDDSI_SCALE", "Scale crop"),
  prop(0x000C, 0x100C, "PIDDSI_HEADINGPAIR", "Heading pair"),
  prop(0x000D, 0x101E, "PIDDSI_DOCPARTS", "Document parts"),
  prop(0x000E, 0x001E, "PIDDSI_MANAGER", "Manager"),
  prop(0x000F, 0x001E, "PIDDSI_COMPANY", "Company"),
  prop(0x0010, 0x000B, "PIDDSI_LINKSDIRTY", "Links dirty"),
  prop(
    0x0011,
    0x0003,
    "PIDDSI_CCHWITHSPACES",
    "Number of characters with white-space",
  ),
  prop(0x0013, 0x000B, "PIDDSI_SHAREDDOC", "Shared document"),
  prop(0x0016, 0x000B, "PIDDSI_HYPERLINKSCHANGED", "Hyper links changed"),
  prop(0x0017, 0x0003, "PIDDSI_VERSION", "Creating application version"),
  prop(0x0018, 0x0041, "PIDDSI_DIGSIG", "Digital signature"),
  prop(0x001A, 0x001E, "PIDDSI_CONTENTTYPE", "Content type"),
  prop(0x001B, 0x001E, "PIDDSI_CONTENTSTATUS", "Content status"),
  prop(0x001C, 0x001E, "PIDDSI_LANGUAGE", "Language"),
  prop(0x001D, 0x001E, "PIDDSI_DOCVERSION", "Document version"),
];

/// Look up the conventional name of a numeric property.
///
/// UTF-16 string codes (`0x001F`, and its vector form `0x101F`) match the
/// entries recorded under the 8-bit string codes, since both string kinds
/// carry the same properties.
#[must_use]
pub fn property_name(
  class: FormatClass,
  entry_type: u32,
  value_type: u16,
) -> Option<&'static PropertyName> {
  let table = match class {
    FormatClass::SummaryInformation => SUMMARY_INFORMATION,
    FormatClass::DocumentSummaryInformation => DOCUMENT_SUMMARY_INFORMATION,
    FormatClass::UserDefinedProperties | FormatClass::Storage => return None,
  };
  let value_type = match value_type {
    0x001F => 0x001E,
    0x101F => 0x101E,
    other => other,
  };
  table
    .iter()
    .find(|p| p.entry_type == entry_type && p.value_type == value_type)
}
