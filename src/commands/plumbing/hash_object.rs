use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use std::io::Write;

impl Repository {
    pub fn hash_object(&mut self, object_path: &str, write: bool) -> anyhow::Result<()> {
        let content = self.workspace().read_file(object_path.as_ref())?;

        let object_id = if write {
            self.ensure_initialized()?;
            self.database().put(ObjectType::Blob, &content)?
        } else {
            ObjectId::from_content(&ObjectType::Blob, &content)
        };

        writeln!(self.writer(), "{object_id}")?;

        Ok(())
    }
}
