use sps_wire::Guid;

/// Well-known format class identifiers (FMTIDs).
///
/// A set's 16-byte identifier says what the set is for. Only a handful are
/// worth naming; any other identifier is still decoded, it just has no
/// friendly name.
///
/// ```text
/// ┌─────────────────────────────┬────────────────────────────────────────┐
/// │ Variant                     │ Identifier                             │
/// ├─────────────────────────────┼────────────────────────────────────────┤
/// │ SummaryInformation          │ {F29F85E0-4FF9-1068-AB91-08002B27B3D9} │
/// │ DocumentSummaryInformation  │ {D5CDD502-2E9C-101B-9397-08002B2CF9AE} │
/// │ UserDefinedProperties       │ {D5CDD505-2E9C-101B-9397-08002B2CF9AE} │
/// │ Storage                     │ {B725F130-47EF-101A-A5F1-02608C9EEBAC} │
/// └─────────────────────────────┴────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatClass {
  SummaryInformation,
  DocumentSummaryInformation,
  /// User-defined properties. Sets with this identifier use name-keyed
  /// records.
  UserDefinedProperties,
  Storage,
}

const SUMMARY_INFORMATION: Guid = Guid::from_fields(
  0xF29F_85E0,
  0x4FF9,
  0x1068,
  [0xAB, 0x91, 0x08, 0x00, 0x2B, 0x27, 0xB3, 0xD9],
);

const DOCUMENT_SUMMARY_INFORMATION: Guid = Guid::from_fields(
  0xD5CD_D502,
  0x2E9C,
  0x101B,
  [0x93, 0x97, 0x08, 0x00, 0x2B, 0x2C, 0xF9, 0xAE],
);

const USER_DEFINED_PROPERTIES: Guid = Guid::from_fields(
  0xD5CD_D505,
  0x2E9C,
  0x101B,
  [0x93, 0x97, 0x08, 0x00, 0x2B, 0x2C, 0xF9, 0xAE],
);

const STORAGE: Guid = Guid::from_fields(
  0xB725_F130,
  0x47EF,
  0x101A,
  [0xA5, 0xF1, 0x02, 0x60, 0x8C, 0x9E, 0xEB, 0xAC],
);

impl FormatClass {
  pub const ALL: [Self; 4] = [
    Self::SummaryInformation,
    Self::DocumentSummaryInformation,
    Self::UserDefinedProperties,
    Self::Storage,
  ];

  #[must_use]
  pub fn identifier(self) -> Guid {
    match self {
      Self::SummaryInformation => SUMMARY_INFORMATION,
      Self::DocumentSummaryInformation => DOCUMENT_SUMMARY_INFORMATION,
      Self::UserDefinedProperties => USER_DEFINED_PROPERTIES,
      Self::Storage => STORAGE,
    }
  }

  #[must_use]
  pub fn from_identifier(identifier: &Guid) -> Option<Self> {
    Self::ALL
      .into_iter()
      .find(|class| class.identifier() == *identifier)
  }

  /// Symbolic name, e.g. `FMTID_SummaryInformation`.
  #[must_use]
  pub fn name(self) -> &'static str {
    match self {
      Self::SummaryInformation => "FMTID_SummaryInformation",
      Self::DocumentSummaryInformation => "FMTID_DocumentSummaryInformation",
      Self::UserDefinedProperties => "FMTID_UserDefinedProperties",
      Self::Storage => "FMTID_Storage",
    }
  }

  #[must_use]
  pub fn description(self) -> &'static str {
    match self {
      Self::SummaryInformation => "Summary information",
      Self::DocumentSummaryInformation => "Document summary information",
      Self::UserDefinedProperties => "User defined",
      Self::Storage => "Storage",
    }
  }
}

/// Record header shape inside a set.
///
/// ```text
/// Numeric: size:u32 entry_type:u32 reserved:u8 value...
/// Named:   size:u32 name_size:u32  reserved:u8 name[name_size] value...
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordLayout {
  /// Integer-keyed records.
  Numeric,
  /// Name-keyed records (UTF-16 name).
  Named,
}

impl RecordLayout {
  /// Pick the record layout for a set with the given format class
  /// identifier.
  #[must_use]
  pub fn for_identifier(identifier: &Guid) -> Self {
    if *identifier == USER_DEFINED_PROPERTIES {
      Self::Named
    } else {
      Self::Numeric
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn identifiers_match_wire_bytes() {
    assert_eq!(
      FormatClass::UserDefinedProperties.identifier().as_bytes(),
      &[
        0x05, 0xd5, 0xcd, 0xd5, 0x9c, 0x2e, 0x1b, 0x10, 0x93, 0x97, 0x08, 0x00, 0x2b, 0x2c, 0xf9,
        0xae
      ]
    );
    assert_eq!(
      FormatClass::SummaryInformation.identifier().to_string(),
      "{F29F85E0-4FF9-1068-AB91-08002B27B3D9}"
    );
  }

  #[test]
  fn lookup_by_identifier() {
    for class in FormatClass::ALL {
      assert_eq!(FormatClass::from_identifier(&class.identifier()), Some(class));
    }
    assert_eq!(FormatClass::from_identifier(&Guid::default()), None);
  }

  #[test]
  fn only_user_defined_is_named() {
    assert_eq!(
      RecordLayout::for_identifier(&FormatClass::UserDefinedProperties.identifier()),
      RecordLayout::Named
    );
    assert_eq!(
      RecordLayout::for_identifier(&FormatClass::DocumentSummaryInformation.identifier()),
      RecordLayout::Numeric
    );
    assert_eq!(
      RecordLayout::for_identifier(&Guid::default()),
      RecordLayout::Numeric
    );
  }
}
