use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::split_lines;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Replays a stored patch over the lines of `base_path` and prints the result.
    pub fn apply_patch(&mut self, patch_id: &str, base_path: &str) -> anyhow::Result<()> {
        let patch_oid = ObjectId::try_parse(patch_id.to_string())?;
        let base = split_lines(&String::from_utf8_lossy(
            &self.workspace().read_file(base_path.as_ref())?,
        ));

        let lines = self.diff_engine().apply_patch(&base, &patch_oid)?;
        for line in lines {
            writeln!(self.writer(), "{line}")?;
        }

        Ok(())
    }
}
