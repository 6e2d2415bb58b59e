//! Shell verbs, one file per verb.
//!
//! Every mutating verb funnels through the scope engine; `cp` composes two
//! scoped resolutions with the copy algorithm, and `chmod` only uses the
//! engine to find its node before handing off to the permission model.

mod cd;
mod chmod;
mod cp;
mod ls;
mod mkdir;
mod pwd;
mod rm;
