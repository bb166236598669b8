pub use crate::{HeapOrderError, MinHeap, PriorityQueue};
pub use itertools::Itertools as _;
pub use log::{debug, error, info, trace, warn};
pub use std::iter::FromIterator as _;
