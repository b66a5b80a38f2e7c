pub mod core;
pub mod load;
pub mod ops;
pub mod query;
pub mod store;

/*
┌──────────────────────────────────────────────────────────────────────────┐
│                         PADDOCK ARCHITECTURE                             │
└──────────────────────────────────────────────────────────────────────────┘

  load (boundary)          store                    query
  ┌───────────────┐   ┌────────────────┐   ┌─────────────────────────┐
  │ CsvTable      │   │ Tables         │   │ drivers / constructors  │
  │ lenient parse ├──►│ Dataset        │◄──┤ seasons / stats         │
  │ rayon fan-out │   │  + pk indexes  │   │  (pure, total handlers) │
  └───────────────┘   │  + fk indexes  │   └───────────┬─────────────┘
                      └────────────────┘               │
                              ▲              ops: join, group, sort,
                              │                   top-n, decade buckets
                      built once, immutable,           │
                      Arc-shared, lock-free   response shapes (serde)
                              │                        │
                      ┌───────┴────────┐      ┌────────▼─────────┐
                      │ core::Database │◄─────┤ presentation /   │
                      │ (facade)       │      │ HTTP collaborator│
                      └────────────────┘      └──────────────────┘
*/
