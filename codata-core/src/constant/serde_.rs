use super::ConstantRecord;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

impl Serialize for ConstantRecord {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut st = s.serialize_struct("ConstantRecord", 6)?;
        st.serialize_field("name", self.name)?;
        st.serialize_field("ident", self.ident)?;
        st.serialize_field("value", &self.value)?;
        st.serialize_field("uncertainty", &self.uncertainty)?;
        st.serialize_field("precision", &self.precision())?;
        st.serialize_field("unit", self.unit)?;
        st.end()
    }
}
