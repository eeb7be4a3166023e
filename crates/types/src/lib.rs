//! Core domain types for the rampart harness.
//!
//! This crate provides the foundational types shared by the workload and
//! audit subsystems:
//!
//! - [`Address`]: a 20-byte on-chain address
//! - [`SigningKey`] / [`Identity`]: a simulated account bound to a credential
//! - [`IdentityPool`]: a fixed, ordered set of identities
//! - [`ParameterSequence`]: a monotonically increasing call-parameter stream
//! - [`ContractCall`]: an opaque method invocation with attached value
//!
//! None of these types perform I/O. Chain interaction lives behind the
//! `ChainClient` trait in `rampart-chain`.

mod address;
mod call;
mod pool;
mod sequence;

pub use address::{Address, AddressParseError, Identity, SigningKey};
pub use call::{CallArg, ContractCall};
pub use pool::IdentityPool;
pub use sequence::ParameterSequence;
