//! A library of classic collection and sorting algorithms.
//!
//! Two independent components are provided: a generic [`Set`](set::Set)
//! with the usual set algebra and combination enumeration, and a family
//! of [in-place sorts](sort) built around a shared partition primitive.
//! Both components are pure and synchronous; nothing here performs I/O or
//! keeps global state.
//!
//! ###### Further Reading
//!
//! 1. [_Quicksort_](https://doi.org/10.1093/comjnl/5.1.10) (Hoare)
//! 2. [_Introduction to Algorithms_, 4th ed.](https://mitpress.mit.edu/9780262046305/introduction-to-algorithms/) (Cormen, et al.)

pub mod set;
pub mod sort;
