//! Concrete holiday calendars.

/// United States federal holidays.
pub mod united_states;
