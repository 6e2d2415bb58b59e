//! rm — delete members through the scope engine.

use objsh_types::Batch;

use crate::scope::delete_scoped;
use crate::shell::Shell;

impl Shell {
    /// Delete the member each path names, local reading first.
    ///
    /// Deleting a name that exists in both scopes removes the local shadow
    /// only; a second `rm` of the same spelling reaches the global one.
    /// A name absent from both scopes is a quiet no-op, reported as
    /// `false` in the per-item results.
    pub fn rm(&mut self, paths: impl Into<Batch<String>>) -> Batch<bool> {
        let cwd = self.cwd().to_string();
        paths
            .into()
            .apply(|path| delete_scoped(self.env_mut(), &cwd, &path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use objsh_types::Node;

    fn shell() -> Shell {
        Shell::from_json(serde_json::json!({
            "Foo": 1,
            "Bar": {"Foo": 2, "keep": true},
            "list": [10, 20, 30],
        }))
        .unwrap()
    }

    #[test]
    fn rm_removes_a_global_member() {
        let mut sh = shell();
        assert_eq!(sh.rm("Foo").into_one(), Some(true));
        assert_eq!(sh.reference("Foo"), None);
    }

    #[test]
    fn rm_peels_the_local_shadow_first() {
        let mut sh = shell();
        sh.cd("Bar").unwrap();

        assert_eq!(sh.rm("Foo").into_one(), Some(true));
        assert_eq!(sh.reference("Bar.Foo"), None);
        assert_eq!(sh.reference("Foo"), Some(&Node::Int(1)));

        assert_eq!(sh.rm("Foo").into_one(), Some(true));
        assert_eq!(sh.reference("Foo"), None);

        // Third removal of the same spelling finds nothing.
        assert_eq!(sh.rm("Foo").into_one(), Some(false));
    }

    #[test]
    fn rm_missing_is_a_quiet_no_op() {
        let mut sh = shell();
        let before = sh.env().clone();
        assert_eq!(sh.rm("nothing.here").into_one(), Some(false));
        assert_eq!(sh.env(), &before);
    }

    #[test]
    fn rm_sequence_index_shifts_items() {
        let mut sh = shell();
        assert_eq!(sh.rm("list[0]").into_one(), Some(true));
        assert_eq!(sh.reference("list[0]"), Some(&Node::Int(20)));
        assert_eq!(sh.reference("list[2]"), None);
    }

    #[test]
    fn rm_batch_reports_per_item() {
        let mut sh = shell();
        let results = sh.rm(vec!["Foo", "ghost", "Bar.keep"]);
        assert_eq!(results, Batch::Seq(vec![true, false, true]));
        assert_eq!(sh.reference("Bar").unwrap().own_names(), vec!["Foo"]);
    }
}
