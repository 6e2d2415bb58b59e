//! cd — change the current working path.

use crate::error::{ShellError, ShellResult};
use crate::path::{join, parse};
use crate::resolver::resolve;
use crate::shell::Shell;

impl Shell {
    /// Change the current working path.
    ///
    /// - `""` moves to the environment root
    /// - `".."` pops the last cwd segment (a no-op at the root)
    /// - anything else must resolve to a mapping or sequence, trying the
    ///   local (cwd-relative) reading first, then the global one
    pub fn cd(&mut self, path: &str) -> ShellResult<()> {
        if path.is_empty() {
            self.set_cwd(String::new());
            return Ok(());
        }

        if path == ".." {
            let cwd = self.cwd().to_string();
            let parent = match cwd.rfind('.') {
                Some(pos) => cwd[..pos].to_string(),
                None => String::new(),
            };
            self.set_cwd(parent);
            return Ok(());
        }

        let local = join(self.cwd(), path);
        if resolve(self.env(), &parse(&local)).is_some_and(|n| n.is_container()) {
            self.set_cwd(local);
            Ok(())
        } else if resolve(self.env(), &parse(path)).is_some_and(|n| n.is_container()) {
            self.set_cwd(path.to_string());
            Ok(())
        } else {
            Err(ShellError::NoSuchObject(path.to_string()))
        }
    }
}
