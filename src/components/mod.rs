// Export components
pub mod availability;

// Re-export the availability handle
pub use availability::AvailabilityHandle;
