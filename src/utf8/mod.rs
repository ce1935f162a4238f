//! Primitive scanners over UTF-8 text.
//!
//! Every primitive validates its configuration, then rejects empty input, then
//! rejects input that is not well-formed UTF-8, and only then scans. Counts and
//! positions are in chars; returned values are byte-exact slices of the input.

pub mod any_of;
pub mod character;
pub mod exact;
pub mod one_of;
pub mod optional;
pub mod take;
pub mod take_until;
pub mod take_while;

pub use any_of::{AnyOf, NotAnyOf, any_of, not_any_of};
pub use character::{Char, char};
pub use exact::{Exact, ExactCaseInsensitive, exact, exact_case_insensitive};
pub use one_of::{NoneOf, OneOf, none_of, one_of};
pub use optional::{Optional, optional};
pub use take::{Take, take};
pub use take_until::{TakeTo, TakeUntil, take_to, take_until};
pub use take_while::{TakeWhile, TakeWhileBetween, take_while, take_while_between};
