//! Test data builders for creating test records

use treelist::records::ImportRecord;

/// Builder for creating test ImportRecords
pub struct ImportRecordBuilder {
    unique_id: u64,
    rva: u64,
    dll: String,
    name: Option<String>,
    ordinal: Option<u16>,
    hint: Option<u32>,
    delay_load: bool,
}

impl ImportRecordBuilder {
    pub fn new(unique_id: u64) -> Self {
        Self {
            unique_id,
            rva: 0x2000,
            dll: "kernel32.dll".to_string(),
            name: None,
            ordinal: None,
            hint: None,
            delay_load: false,
        }
    }

    pub fn rva(mut self, rva: u64) -> Self {
        self.rva = rva;
        self
    }

    pub fn dll(mut self, dll: &str) -> Self {
        self.dll = dll.to_string();
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn ordinal(mut self, ordinal: u16) -> Self {
        self.ordinal = Some(ordinal);
        self
    }

    pub fn hint(mut self, hint: u32) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn delay_load(mut self) -> Self {
        self.delay_load = true;
        self
    }

    pub fn build(self) -> ImportRecord {
        ImportRecord {
            unique_id: self.unique_id,
            rva: self.rva,
            dll: self.dll,
            delay_load: self.delay_load,
            name: self.name,
            ordinal: self.ordinal,
            hint: self.hint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_record_builder() {
        let rec = ImportRecordBuilder::new(7)
            .rva(0x3000)
            .dll("user32.dll")
            .name("MessageBoxW")
            .hint(44)
            .build();

        assert_eq!(rec.unique_id, 7);
        assert_eq!(rec.rva, 0x3000);
        assert_eq!(rec.dll, "user32.dll");
        assert_eq!(rec.name.as_deref(), Some("MessageBoxW"));
        assert_eq!(rec.hint, Some(44));
        assert!(!rec.delay_load);
    }
}
