//! crudy core - hexagonal architecture implementation
//!
//! This crate provides the domain and application layers for the crudy
//! CRUD service scaffolder, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             crudy-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Filesystem, Store, Renderer, License)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     crudy-adapters (Infrastructure)     │
//! │  (LocalFilesystem, MiniJinjaRenderer)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Project, ProjectResolver, CATALOG)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crudy_core::prelude::*;
//!
//! let service = ScaffoldService::new(config, store, renderer, filesystem, licenses);
//! let project = service.resolve(&working_dir, &args)?;
//! let report = service.materialize(&project)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        MaterializeReport, ScaffoldService,
        ports::{Filesystem, LicenseProvider, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        CATALOG, ContextValue, License, Project, ProjectResolver, RenderContext, ScaffoldConfig,
    };
    pub use crate::error::{CrudyError, CrudyResult};
}
