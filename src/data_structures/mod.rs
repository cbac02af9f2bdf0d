pub mod index_min_heap;

pub use index_min_heap::IndexMinHeap;
