//! Schema export of a [`Definition`].
//!
//! Serializing a definition writes its resolved facts, not its raw options,
//! so a dump shows what an engine will actually see. Absent facts are
//! skipped. Type and module handles are written by name only, which is
//! why there is no `Deserialize` counterpart.

use alloc::collections::BTreeMap;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::{Definition, Value};

impl Serialize for Definition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Definition", 11)?;

        state.serialize_field("name", self.name())?;
        state.serialize_field("from", self.from())?;
        state.serialize_field("setter", &self.setter())?;
        state.serialize_field("typed", &self.is_typed())?;
        state.serialize_field("collection", &self.is_array())?;
        state.serialize_field("hash", &self.is_hash())?;

        match self.sought_type() {
            Some(ty) => state.serialize_field("sought_type", ty.type_path())?,
            None => state.skip_field("sought_type")?,
        }
        match self.representer_module() {
            Some(module) => state.serialize_field("representer", module.module_name())?,
            None => state.skip_field("representer")?,
        }
        match self.default() {
            Some(value) => state.serialize_field("default", &value)?,
            None => state.skip_field("default")?,
        }
        match self.include_nil() {
            Some(include_nil) => state.serialize_field("include_nil", &include_nil)?,
            None => state.skip_field("include_nil")?,
        }

        let extras = &self.options().extras;
        if extras.is_empty() {
            state.skip_field("extras")?;
        } else {
            // Sorted, so dumps are stable across runs.
            let sorted: BTreeMap<&str, &Value> = extras.iter().collect();
            state.serialize_field("extras", &sorted)?;
        }

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Definition, Options, Representer};

    struct SongRepresenter;
    impl Representer for SongRepresenter {
        fn module_name(&self) -> &str {
            "SongRepresenter"
        }
    }

    #[test]
    fn plain_property() {
        let def = Definition::named("song").unwrap();
        let json = serde_json::to_string(&def).unwrap();

        assert_eq!(
            json,
            r#"{"name":"song","from":"song","setter":"song=","typed":false,"collection":false,"hash":false}"#
        );
    }

    #[test]
    fn collection_property() {
        let options = Options::new()
            .with_collection(true)
            .with_representer(SongRepresenter)
            .with_include_nil(false)
            .with_from("track")
            .with_extra("wrap", "songs")
            .with_extra("tag", "song");
        let def = Definition::new("songs", options).unwrap();
        let json = serde_json::to_string(&def).unwrap();

        assert_eq!(
            json,
            concat!(
                r#"{"name":"songs","from":"track","setter":"songs=","typed":true,"#,
                r#""collection":true,"hash":false,"representer":"SongRepresenter","#,
                r#""default":[],"include_nil":false,"extras":{"tag":"song","wrap":"songs"}}"#,
            )
        );
    }

    #[test]
    fn sought_type_path() {
        let def = Definition::new("title", Options::new().with_class::<u32>()).unwrap();
        let value: serde_json::Value = serde_json::to_value(&def).unwrap();

        assert_eq!(value["sought_type"], "u32");
        assert_eq!(value["typed"], true);
        assert!(value.get("representer").is_none());
    }

    #[test]
    fn ron_dump() {
        let def = Definition::new("song", Options::new().with_default("Atheist Peace")).unwrap();
        let ron = ron::to_string(&def).unwrap();

        assert!(ron.contains(r#""Atheist Peace""#));
        assert!(ron.contains(r#""song=""#));
        assert!(!ron.contains("representer"));
    }
}
