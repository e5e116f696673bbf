//! Contains the start request models that are shared between the services
//! asking for auctions and the auctioneer running them.

pub mod auction;

pub use self::auction::{LrpStartRequest, PlacementConstraint, Resource, TaskStartRequest};
