//! Advisory permission model.
//!
//! A container node may carry a fixed 3×3 matrix of booleans — user class
//! (owner, group, other) × right (read, write, execute) — attached lazily by
//! the first valid `chmod` and kept for the node's lifetime. The matrix is
//! metadata only: nothing in the shell ever denies an operation because of
//! it.
//!
//! Two mode grammars are accepted:
//!
//! - symbolic relative, `u+rw` / `-x` — sets or clears the named rights for
//!   the **owner** class only (group and other are unreachable through this
//!   form; use the numeric form to touch them)
//! - numeric absolute, exactly three octal digits assigned owner, group,
//!   other in that order — replaces every class's full right-set at once

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::node::Node;

/// User class axis of the permission matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserClass {
    Owner,
    Group,
    Other,
}

/// Right axis of the permission matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Right {
    Read,
    Write,
    Execute,
}

impl FromStr for UserClass {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        match s {
            "owner" => Ok(UserClass::Owner),
            "group" => Ok(UserClass::Group),
            "other" => Ok(UserClass::Other),
            _ => Err(()),
        }
    }
}

impl FromStr for Right {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        match s {
            "read" => Ok(Right::Read),
            "write" => Ok(Right::Write),
            "execute" => Ok(Right::Execute),
            _ => Err(()),
        }
    }
}

/// Fixed 3×3 permission table. All rights start false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermMatrix {
    // [class][right], indexed by the enum discriminants below.
    bits: [[bool; 3]; 3],
}

impl PermMatrix {
    fn class_index(class: UserClass) -> usize {
        match class {
            UserClass::Owner => 0,
            UserClass::Group => 1,
            UserClass::Other => 2,
        }
    }

    fn right_index(right: Right) -> usize {
        match right {
            Right::Read => 0,
            Right::Write => 1,
            Right::Execute => 2,
        }
    }

    /// Point query against the matrix.
    pub fn allows(&self, class: UserClass, right: Right) -> bool {
        self.bits[Self::class_index(class)][Self::right_index(right)]
    }

    /// Set or clear a single bit.
    pub fn set(&mut self, class: UserClass, right: Right, value: bool) {
        self.bits[Self::class_index(class)][Self::right_index(right)] = value;
    }

    /// Replace one class's full right-set from an octal digit:
    /// read = (d ÷ 4) mod 2, write = (d ÷ 2) mod 2, execute = d mod 2.
    pub fn set_class_octal(&mut self, class: UserClass, digit: u8) {
        debug_assert!(digit <= 7);
        let row = &mut self.bits[Self::class_index(class)];
        row[0] = (digit / 4) % 2 == 1;
        row[1] = (digit / 2) % 2 == 1;
        row[2] = digit % 2 == 1;
    }
}

fn symbolic_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^u?([+-])([rwx]+)$").unwrap())
}

fn numeric_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-7]{3}$").unwrap())
}

/// Apply a mode string to a node's permission matrix.
///
/// Returns false — and leaves the node untouched, matrix uninitialized if it
/// was — for scalar nodes and for mode text matching neither grammar.
pub fn chmod(node: &mut Node, mode: &str) -> bool {
    if let Some(caps) = symbolic_re().captures(mode) {
        let grant = &caps[1] == "+";
        let rights: Vec<Right> = caps[2]
            .chars()
            .map(|c| match c {
                'r' => Right::Read,
                'w' => Right::Write,
                _ => Right::Execute,
            })
            .collect();
        let Some(meta) = node.meta_mut() else {
            return false;
        };
        let matrix = meta.perms.get_or_insert_with(PermMatrix::default);
        for right in rights {
            matrix.set(UserClass::Owner, right, grant);
        }
        true
    } else if numeric_re().is_match(mode) {
        let digits: Vec<u8> = mode.bytes().map(|b| b - b'0').collect();
        let Some(meta) = node.meta_mut() else {
            return false;
        };
        let matrix = meta.perms.get_or_insert_with(PermMatrix::default);
        matrix.set_class_octal(UserClass::Owner, digits[0]);
        matrix.set_class_octal(UserClass::Group, digits[1]);
        matrix.set_class_octal(UserClass::Other, digits[2]);
        true
    } else {
        false
    }
}

/// Pure point query. False for scalars and for nodes whose matrix was never
/// initialized.
pub fn chmod_check(node: &Node, right: Right, class: UserClass) -> bool {
    node.meta()
        .and_then(|meta| meta.perms.as_ref())
        .is_some_and(|matrix| matrix.allows(class, right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn uninitialized_matrix_answers_false() {
        let node = Node::empty_map();
        assert!(!chmod_check(&node, Right::Read, UserClass::Owner));
        assert!(!chmod_check(&node, Right::Execute, UserClass::Other));
    }

    #[test]
    fn symbolic_grant_touches_owner_only() {
        let mut node = Node::empty_map();
        assert!(chmod(&mut node, "u+rw"));
        assert!(chmod_check(&node, Right::Read, UserClass::Owner));
        assert!(chmod_check(&node, Right::Write, UserClass::Owner));
        assert!(!chmod_check(&node, Right::Execute, UserClass::Owner));
        assert!(!chmod_check(&node, Right::Read, UserClass::Group));
        assert!(!chmod_check(&node, Right::Read, UserClass::Other));
    }

    #[test]
    fn symbolic_clear_is_relative() {
        let mut node = Node::empty_map();
        assert!(chmod(&mut node, "+rwx"));
        assert!(chmod(&mut node, "-w"));
        assert!(chmod_check(&node, Right::Read, UserClass::Owner));
        assert!(!chmod_check(&node, Right::Write, UserClass::Owner));
        assert!(chmod_check(&node, Right::Execute, UserClass::Owner));
    }

    #[test]
    fn numeric_750() {
        let mut node = Node::empty_map();
        assert!(chmod(&mut node, "750"));
        // owner 7 → rwx, group 5 → r-x, other 0 → ---
        assert!(chmod_check(&node, Right::Read, UserClass::Owner));
        assert!(chmod_check(&node, Right::Write, UserClass::Owner));
        assert!(chmod_check(&node, Right::Execute, UserClass::Owner));
        assert!(chmod_check(&node, Right::Read, UserClass::Group));
        assert!(!chmod_check(&node, Right::Write, UserClass::Group));
        assert!(chmod_check(&node, Right::Execute, UserClass::Group));
        assert!(!chmod_check(&node, Right::Read, UserClass::Other));
        assert!(!chmod_check(&node, Right::Write, UserClass::Other));
        assert!(!chmod_check(&node, Right::Execute, UserClass::Other));
    }

    #[rstest]
    #[case(0, false, false, false)]
    #[case(1, false, false, true)]
    #[case(2, false, true, false)]
    #[case(3, false, true, true)]
    #[case(4, true, false, false)]
    #[case(5, true, false, true)]
    #[case(6, true, true, false)]
    #[case(7, true, true, true)]
    fn octal_digit_decomposition(
        #[case] digit: u8,
        #[case] read: bool,
        #[case] write: bool,
        #[case] execute: bool,
    ) {
        let mut matrix = PermMatrix::default();
        matrix.set_class_octal(UserClass::Group, digit);
        assert_eq!(matrix.allows(UserClass::Group, Right::Read), read);
        assert_eq!(matrix.allows(UserClass::Group, Right::Write), write);
        assert_eq!(matrix.allows(UserClass::Group, Right::Execute), execute);
    }

    #[test]
    fn numeric_is_absolute_not_relative() {
        let mut node = Node::empty_map();
        assert!(chmod(&mut node, "777"));
        assert!(chmod(&mut node, "100"));
        assert!(!chmod_check(&node, Right::Read, UserClass::Owner));
        assert!(chmod_check(&node, Right::Execute, UserClass::Owner));
        assert!(!chmod_check(&node, Right::Read, UserClass::Group));
    }

    #[test]
    fn invalid_mode_leaves_node_untouched() {
        let mut node = Node::empty_map();
        for bad in ["", "rwx", "u+q", "78", "0750", "g+r", "++r", "abc"] {
            assert!(!chmod(&mut node, bad), "accepted {bad:?}");
        }
        // The matrix was never initialized by a failed call.
        assert!(node.meta().unwrap().perms.is_none());

        assert!(chmod(&mut node, "u+r"));
        assert!(!chmod(&mut node, "nonsense"));
        assert!(chmod_check(&node, Right::Read, UserClass::Owner));
    }

    #[test]
    fn chmod_on_scalar_fails() {
        let mut node = Node::Int(3);
        assert!(!chmod(&mut node, "u+r"));
        assert!(!chmod_check(&node, Right::Read, UserClass::Owner));
    }

    #[test]
    fn class_and_right_parse() {
        assert_eq!("owner".parse(), Ok(UserClass::Owner));
        assert_eq!("execute".parse(), Ok(Right::Execute));
        assert!("root".parse::<UserClass>().is_err());
        assert!("rwx".parse::<Right>().is_err());
    }
}
