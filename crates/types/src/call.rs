//! Opaque contract-call descriptions.

use crate::Address;
use serde::{Deserialize, Serialize};

/// A single argument to a contract method.
///
/// The harness treats method arguments as opaque configuration values; the
/// chain client is responsible for ABI encoding on the other side of the
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CallArg {
    /// An unsigned integer argument.
    Uint(u64),
    /// A single address argument.
    Addr(Address),
    /// A list of addresses.
    AddrList(Vec<Address>),
    /// A list of unsigned integers.
    UintList(Vec<u64>),
    /// A 4-byte function selector, hex-encoded.
    Selector(String),
}

/// A method invocation against a target contract, with attached value.
///
/// An empty method name denotes a bare value transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractCall {
    /// Method name or selector, opaque to the harness.
    pub method: String,
    /// Ordered arguments.
    pub args: Vec<CallArg>,
    /// Transfer value attached to the call, in wei.
    pub value_wei: u128,
}

impl ContractCall {
    /// A call to `method` with no arguments and no value.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            args: Vec::new(),
            value_wei: 0,
        }
    }

    /// A bare value transfer carrying no method call.
    pub fn value_transfer(value_wei: u128) -> Self {
        Self {
            method: String::new(),
            args: Vec::new(),
            value_wei,
        }
    }

    /// Append an argument.
    pub fn arg(mut self, arg: CallArg) -> Self {
        self.args.push(arg);
        self
    }

    /// Set the attached transfer value.
    pub fn with_value(mut self, value_wei: u128) -> Self {
        self.value_wei = value_wei;
        self
    }

    /// Whether this call is a bare value transfer.
    pub fn is_transfer(&self) -> bool {
        self.method.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accumulates_args_in_order() {
        let call = ContractCall::new("attack")
            .arg(CallArg::Uint(7))
            .arg(CallArg::Uint(8))
            .with_value(100);

        assert_eq!(call.method, "attack");
        assert_eq!(call.args, vec![CallArg::Uint(7), CallArg::Uint(8)]);
        assert_eq!(call.value_wei, 100);
        assert!(!call.is_transfer());
    }

    #[test]
    fn value_transfer_has_no_method() {
        let call = ContractCall::value_transfer(42);
        assert!(call.is_transfer());
        assert_eq!(call.value_wei, 42);
    }
}
