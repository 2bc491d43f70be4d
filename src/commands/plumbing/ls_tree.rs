use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;
use std::path::Path;

impl Repository {
    pub fn ls_tree(&mut self, object_id: &str, recursive: bool) -> anyhow::Result<()> {
        let oid = ObjectId::try_parse(object_id.to_string())?;

        self.print_tree(&oid, None, recursive)
    }

    fn print_tree(
        &self,
        oid: &ObjectId,
        prefix: Option<&Path>,
        recursive: bool,
    ) -> anyhow::Result<()> {
        let tree = self.database().parse_object_as_tree(oid)?;

        for (name, entry) in tree.entries() {
            let path = match prefix {
                Some(prefix) => prefix.join(name),
                None => Path::new(name).to_path_buf(),
            };

            if recursive && entry.is_tree() {
                self.print_tree(&entry.oid, Some(&path), recursive)?;
            } else {
                writeln!(
                    self.writer(),
                    "{} {}\t{}",
                    entry.object_type,
                    entry.oid,
                    path.display()
                )?;
            }
        }

        Ok(())
    }
}
