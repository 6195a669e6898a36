//! # Bondgrid Bonds
//!
//! The bond record model behind the bond-entry grid.
//!
//! - [`RawBondRecord`]: string-typed grid row, parsed at the boundary
//! - [`BondRecord`]: validated bond terms plus cached price, duration and
//!   convexity
//! - [`CashFlowInputs`]: the terms a schedule generator needs
//! - [`ScheduleGenerator`]: turns inputs into a dated cash-flow schedule;
//!   [`FixedBondScheduleGenerator`] is the fixed-coupon implementation
//! - [`Timetable`]: text rendering of a bond's schedule
//!
//! ## Example
//!
//! ```rust
//! use bondgrid_bonds::prelude::*;
//! use bondgrid_core::Date;
//!
//! let pricing = Date::parse("2024-01-02").unwrap();
//! let record = default_record(1, pricing).unwrap();
//! assert_eq!(record.identifier(), "Bond 1");
//!
//! let schedule = FixedBondScheduleGenerator
//!     .generate(&record.to_cashflow_inputs())
//!     .unwrap();
//! assert_eq!(schedule.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]

pub mod error;
mod raw;
mod record;
pub mod schedule;
mod timetable;

pub use error::{BondError, BondResult};
pub use raw::{RawBondRecord, RawValue};
pub use record::{
    default_record, default_record_with, BondField, BondMetrics, BondRecord, CashFlowInputs,
    RecordDefaults,
};
pub use schedule::{FixedBondScheduleGenerator, ScheduleGenerator};
pub use timetable::{Timetable, TimetableRow};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        default_record, default_record_with, BondError, BondField, BondMetrics, BondRecord,
        BondResult, CashFlowInputs, FixedBondScheduleGenerator, RawBondRecord, RecordDefaults,
        ScheduleGenerator, Timetable,
    };
}
