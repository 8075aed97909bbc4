pub mod firestore_rest;

pub use firestore_rest::FirestoreRestStore;
