pub mod collection_store;

pub use collection_store::{
    CollectionStore, Document, DynStore, FieldFilter, OrderBy, SortDirection, StoreError,
};
