//! Hand-maintained protobuf structs for the message packages this crate
//! decodes and the `cosmwasm.wasm.v1` wire types it speaks.
//!
//! `ibc-proto` ships the generated cosmos packages, but its serde derives
//! only cover part of that tree and it does not carry wasmd at all; every
//! type the registry renders as JSON must implement `Serialize`. The
//! messages below are therefore mirrored here in generated form, with serde
//! derives. Field numbers follow the upstream proto definitions; unknown
//! wire fields are skipped on decode.

use ibc_proto::cosmos::base::v1beta1::Coin;

/// `google.protobuf.Any` mirror used inside the hand-maintained messages.
#[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
pub struct Any {
    #[prost(string, tag = "1")]
    pub type_url: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "2")]
    pub value: ::prost::alloc::vec::Vec<u8>,
}

/// `cosmos.staking.v1beta1` transaction messages.
pub mod staking {
    use super::{Any, Coin};

    /// Description defines a validator description.
    #[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
    pub struct Description {
        /// moniker defines a human-readable name for the validator.
        #[prost(string, tag = "1")]
        pub moniker: ::prost::alloc::string::String,
        /// identity defines an optional identity signature.
        #[prost(string, tag = "2")]
        pub identity: ::prost::alloc::string::String,
        /// website defines an optional website link.
        #[prost(string, tag = "3")]
        pub website: ::prost::alloc::string::String,
        /// security_contact defines an optional email for security contact.
        #[prost(string, tag = "4")]
        pub security_contact: ::prost::alloc::string::String,
        /// details define other optional details.
        #[prost(string, tag = "5")]
        pub details: ::prost::alloc::string::String,
    }

    /// CommissionRates defines the initial commission rates to be used for
    /// creating a validator.
    #[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
    pub struct CommissionRates {
        /// rate is the commission rate charged to delegators, as a fraction.
        #[prost(string, tag = "1")]
        pub rate: ::prost::alloc::string::String,
        /// max_rate defines the maximum commission rate which validator can ever charge, as a fraction.
        #[prost(string, tag = "2")]
        pub max_rate: ::prost::alloc::string::String,
        /// max_change_rate defines the maximum daily increase of the validator commission, as a fraction.
        #[prost(string, tag = "3")]
        pub max_change_rate: ::prost::alloc::string::String,
    }

    /// MsgCreateValidator defines a SDK message for creating a new validator.
    #[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
    pub struct MsgCreateValidator {
        #[prost(message, optional, tag = "1")]
        pub description: ::core::option::Option<Description>,
        #[prost(message, optional, tag = "2")]
        pub commission: ::core::option::Option<CommissionRates>,
        #[prost(string, tag = "3")]
        pub min_self_delegation: ::prost::alloc::string::String,
        #[prost(string, tag = "4")]
        pub delegator_address: ::prost::alloc::string::String,
        #[prost(string, tag = "5")]
        pub validator_address: ::prost::alloc::string::String,
        #[prost(message, optional, tag = "6")]
        pub pubkey: ::core::option::Option<Any>,
        #[prost(message, optional, tag = "7")]
        pub value: ::core::option::Option<Coin>,
    }

    /// MsgEditValidator defines a SDK message for editing an existing validator.
    #[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
    pub struct MsgEditValidator {
        #[prost(message, optional, tag = "1")]
        pub description: ::core::option::Option<Description>,
        #[prost(string, tag = "2")]
        pub validator_address: ::prost::alloc::string::String,
        /// We pass a reference to the new commission rate and min self delegation as
        /// it's not mandatory to update.
        #[prost(string, tag = "3")]
        pub commission_rate: ::prost::alloc::string::String,
        #[prost(string, tag = "4")]
        pub min_self_delegation: ::prost::alloc::string::String,
    }

    /// MsgDelegate defines a SDK message for performing a delegation of coins
    /// from a delegator to a validator.
    #[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
    pub struct MsgDelegate {
        #[prost(string, tag = "1")]
        pub delegator_address: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub validator_address: ::prost::alloc::string::String,
        #[prost(message, optional, tag = "3")]
        pub amount: ::core::option::Option<Coin>,
    }

    /// MsgUndelegate defines a SDK message for performing an undelegation from a
    /// delegate and a validator.
    #[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
    pub struct MsgUndelegate {
        #[prost(string, tag = "1")]
        pub delegator_address: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub validator_address: ::prost::alloc::string::String,
        #[prost(message, optional, tag = "3")]
        pub amount: ::core::option::Option<Coin>,
    }

    /// MsgBeginRedelegate defines a SDK message for performing a redelegation
    /// of coins from a delegator and source validator to a destination validator.
    #[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
    pub struct MsgBeginRedelegate {
        #[prost(string, tag = "1")]
        pub delegator_address: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub validator_src_address: ::prost::alloc::string::String,
        #[prost(string, tag = "3")]
        pub validator_dst_address: ::prost::alloc::string::String,
        #[prost(message, optional, tag = "4")]
        pub amount: ::core::option::Option<Coin>,
    }
}

/// `cosmos.gov.v1beta1` transaction messages.
pub mod gov {
    use super::{Any, Coin};

    /// MsgSubmitProposal defines an sdk.Msg type that supports submitting arbitrary
    /// proposal Content.
    #[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
    pub struct MsgSubmitProposal {
        #[prost(message, optional, tag = "1")]
        pub content: ::core::option::Option<Any>,
        #[prost(message, repeated, tag = "2")]
        pub initial_deposit: ::prost::alloc::vec::Vec<Coin>,
        #[prost(string, tag = "3")]
        pub proposer: ::prost::alloc::string::String,
    }

    /// MsgVote defines a message to cast a vote.
    #[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
    pub struct MsgVote {
        #[prost(uint64, tag = "1")]
        pub proposal_id: u64,
        #[prost(string, tag = "2")]
        pub voter: ::prost::alloc::string::String,
        #[prost(int32, tag = "3")]
        pub option: i32,
    }

    /// MsgDeposit defines a message to submit a deposit to an existing proposal.
    #[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
    pub struct MsgDeposit {
        #[prost(uint64, tag = "1")]
        pub proposal_id: u64,
        #[prost(string, tag = "2")]
        pub depositor: ::prost::alloc::string::String,
        #[prost(message, repeated, tag = "3")]
        pub amount: ::prost::alloc::vec::Vec<Coin>,
    }
}

/// `cosmos.distribution.v1beta1` transaction messages.
pub mod distribution {
    use super::Coin;

    /// MsgSetWithdrawAddress sets the withdraw address for a delegator (or
    /// validator self-delegation).
    #[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
    pub struct MsgSetWithdrawAddress {
        #[prost(string, tag = "1")]
        pub delegator_address: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub withdraw_address: ::prost::alloc::string::String,
    }

    /// MsgWithdrawDelegatorReward represents delegation withdrawal to a delegator
    /// from a single validator.
    #[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
    pub struct MsgWithdrawDelegatorReward {
        #[prost(string, tag = "1")]
        pub delegator_address: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub validator_address: ::prost::alloc::string::String,
    }

    /// MsgWithdrawValidatorCommission withdraws the full commission to the
    /// validator address.
    #[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
    pub struct MsgWithdrawValidatorCommission {
        #[prost(string, tag = "1")]
        pub validator_address: ::prost::alloc::string::String,
    }

    /// MsgFundCommunityPool allows an account to directly fund the community
    /// pool.
    #[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
    pub struct MsgFundCommunityPool {
        #[prost(message, repeated, tag = "1")]
        pub amount: ::prost::alloc::vec::Vec<Coin>,
        #[prost(string, tag = "2")]
        pub depositor: ::prost::alloc::string::String,
    }
}

/// `cosmwasm.wasm.v1` transaction messages and smart-query wire types.
pub mod wasm {
    use super::Coin;

    /// AccessConfig access control type.
    #[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
    pub struct AccessConfig {
        #[prost(int32, tag = "1")]
        pub permission: i32,
        #[prost(string, repeated, tag = "3")]
        pub addresses: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    }

    /// MsgStoreCode submit Wasm code to the system.
    #[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
    pub struct MsgStoreCode {
        /// Sender is the actor that signed the messages
        #[prost(string, tag = "1")]
        pub sender: ::prost::alloc::string::String,
        /// WASMByteCode can be raw or gzip compressed
        #[prost(bytes = "vec", tag = "2")]
        pub wasm_byte_code: ::prost::alloc::vec::Vec<u8>,
        /// InstantiatePermission access control to apply on contract creation,
        /// optional
        #[prost(message, optional, tag = "5")]
        pub instantiate_permission: ::core::option::Option<AccessConfig>,
    }

    /// MsgInstantiateContract create a new smart contract instance for the given
    /// code id.
    #[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
    pub struct MsgInstantiateContract {
        /// Sender is the that actor that signed the messages
        #[prost(string, tag = "1")]
        pub sender: ::prost::alloc::string::String,
        /// Admin is an optional address that can execute migrations
        #[prost(string, tag = "2")]
        pub admin: ::prost::alloc::string::String,
        /// CodeID is the reference to the stored WASM code
        #[prost(uint64, tag = "3")]
        pub code_id: u64,
        /// Label is optional metadata to be stored with a contract instance.
        #[prost(string, tag = "4")]
        pub label: ::prost::alloc::string::String,
        /// Msg json encoded message to be passed to the contract on instantiation
        #[prost(bytes = "vec", tag = "5")]
        pub msg: ::prost::alloc::vec::Vec<u8>,
        /// Funds coins that are transferred to the contract on instantiation
        #[prost(message, repeated, tag = "6")]
        pub funds: ::prost::alloc::vec::Vec<Coin>,
    }

    /// MsgExecuteContract submits the given message data to a smart contract.
    #[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
    pub struct MsgExecuteContract {
        /// Sender is the that actor that signed the messages
        #[prost(string, tag = "1")]
        pub sender: ::prost::alloc::string::String,
        /// Contract is the address of the smart contract
        #[prost(string, tag = "2")]
        pub contract: ::prost::alloc::string::String,
        /// Msg json encoded message to be passed to the contract
        #[prost(bytes = "vec", tag = "3")]
        pub msg: ::prost::alloc::vec::Vec<u8>,
        /// Funds coins that are transferred to the contract on execution
        #[prost(message, repeated, tag = "5")]
        pub funds: ::prost::alloc::vec::Vec<Coin>,
    }

    /// MsgMigrateContract runs a code upgrade/ downgrade for a smart contract.
    #[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
    pub struct MsgMigrateContract {
        /// Sender is the that actor that signed the messages
        #[prost(string, tag = "1")]
        pub sender: ::prost::alloc::string::String,
        /// Contract is the address of the smart contract
        #[prost(string, tag = "2")]
        pub contract: ::prost::alloc::string::String,
        /// CodeID references the new WASM code
        #[prost(uint64, tag = "3")]
        pub code_id: u64,
        /// Msg json encoded message to be passed to the contract on migration
        #[prost(bytes = "vec", tag = "4")]
        pub msg: ::prost::alloc::vec::Vec<u8>,
    }

    /// MsgUpdateAdmin sets a new admin for a smart contract.
    #[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
    pub struct MsgUpdateAdmin {
        /// Sender is the that actor that signed the messages
        #[prost(string, tag = "1")]
        pub sender: ::prost::alloc::string::String,
        /// NewAdmin address to be set
        #[prost(string, tag = "2")]
        pub new_admin: ::prost::alloc::string::String,
        /// Contract is the address of the smart contract
        #[prost(string, tag = "3")]
        pub contract: ::prost::alloc::string::String,
    }

    /// MsgClearAdmin removes any admin stored for a smart contract.
    #[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
    pub struct MsgClearAdmin {
        /// Sender is the actor that signed the messages
        #[prost(string, tag = "1")]
        pub sender: ::prost::alloc::string::String,
        /// Contract is the address of the smart contract
        #[prost(string, tag = "3")]
        pub contract: ::prost::alloc::string::String,
    }

    /// QuerySmartContractStateRequest is the request type for the
    /// Query/SmartContractState RPC method.
    #[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
    pub struct QuerySmartContractStateRequest {
        /// address is the address of the contract
        #[prost(string, tag = "1")]
        pub address: ::prost::alloc::string::String,
        /// QueryData contains the query data passed to the contract
        #[prost(bytes = "vec", tag = "2")]
        pub query_data: ::prost::alloc::vec::Vec<u8>,
    }

    /// QuerySmartContractStateResponse is the response type for the
    /// Query/SmartContractState RPC method.
    #[derive(::serde::Serialize, ::serde::Deserialize, Clone, PartialEq, ::prost::Message)]
    pub struct QuerySmartContractStateResponse {
        /// Data contains the json data returned by the smart contract
        #[prost(bytes = "vec", tag = "1")]
        pub data: ::prost::alloc::vec::Vec<u8>,
    }
}
