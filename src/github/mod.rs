//! GitHub REST access for repositories and pull requests.
//!
//! Requests are described by [`RequestDescriptor`], sent one at a time by a
//! [`Transport`], and walked across pages by [`paginate_all`], which reads the
//! `Link` header of the first response to learn how many pages exist. The
//! gateways build on that to list repositories and pull requests for a user
//! or organization.

pub mod api;
pub mod descriptor;
pub mod error;
pub mod gateway;
pub mod link;
pub mod models;
pub mod paginator;
pub mod scope;
pub mod settings;
pub mod transport;

pub use api::GitHubApi;
pub use descriptor::RequestDescriptor;
pub use error::GitHubError;
pub use gateway::{
    PullRequestArgs, PullRequestGateway, PullRequestState, RepositoryArgs, RepositoryGateway,
    ResourceGateway,
};
pub use link::PageLinkSet;
pub use models::{PullRequestRecord, RepositoryRecord};
pub use paginator::{collect_json_pages, decode_page, paginate_all};
pub use scope::Scope;
pub use settings::{ApiSettings, ApiVersion};
pub use transport::{ApiResponse, HttpTransport, Transport};

#[cfg(test)]
pub use transport::MockTransport;
