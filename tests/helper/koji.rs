//! Koji server test utilities

use mockito::{Mock, Server, ServerGuard};

/// A pkglist with a mix of crates, pre-releases and non-Rust packages
pub const PKGLIST: &str = "\
toplink/packages/rust-libc/0.2.150/1.fc40/noarch/rust-libc-devel-0.2.150-1.fc40.noarch.rpm
toplink/packages/rust-libc/0.2.150/1.fc40/noarch/rust-libc+default-devel-0.2.150-1.fc40.noarch.rpm
toplink/packages/rust-serde/1.0.190/1.fc40/noarch/rust-serde-devel-1.0.190-1.fc40.noarch.rpm
toplink/packages/rust-nix/0.27.1/1.fc40/noarch/rust-nix-devel-0.27.1-1.fc40.noarch.rpm
toplink/packages/rust-devicemapper/0.34.0~rc.1/1.fc40/noarch/rust-devicemapper-devel-0.34.0~rc.1-1.fc40.noarch.rpm
toplink/packages/rust-tokio/1.35.0/1.fc40/noarch/rust-tokio-devel-1.35.0-1.fc40.noarch.rpm
toplink/packages/python3/3.12.1/1.fc40/x86_64/python3-3.12.1-1.fc40.x86_64.rpm
";

/// Start a mock Koji server serving `body` as the pkglist of `repo_tag`
pub async fn create_koji_server(repo_tag: &str, body: &str) -> (ServerGuard, Mock) {
    let mut server = Server::new_async().await;

    let mock = server
        .mock(
            "GET",
            format!("/repos/{repo_tag}/latest/x86_64/pkglist").as_str(),
        )
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body(body)
        .create_async()
        .await;

    (server, mock)
}
