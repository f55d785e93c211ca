//! Article markdown parsing.
//!
//! The dialect is deliberately small: `##`/`###` headings, `> ` quotes,
//! `- `/`* ` and `N. ` lists, `---` dividers, `**bold**` and `[text](url)`.
//! Every function here is pure and total.

mod assembler;
mod block;
mod heading;
mod inline;
mod slug;
mod toc;

pub use assembler::assemble;
pub use block::tokenize;
pub use inline::resolve_inline;
pub use slug::slug;
pub use toc::extract_toc;
