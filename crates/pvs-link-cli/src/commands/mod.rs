//! Command implementations.
//!
//! Each `run_*` function makes the calls one subcommand needs and returns the
//! text to print.

pub mod certificate;
pub mod communication;
pub mod device;
pub mod firmware;
pub mod grid_profile;
pub mod inverter;
pub mod network;
pub mod pcs;
pub mod ping;
pub mod status;
pub mod system_health;
pub mod traceroute;
pub mod tunnel;
pub mod whitelist;

pub use certificate::run_certificate;
pub use communication::run_communication;
pub use device::run_device;
pub use firmware::run_firmware;
pub use grid_profile::run_grid_profile;
pub use inverter::run_inverter;
pub use network::run_network;
pub use pcs::run_pcs;
pub use ping::run_ping;
pub use status::run_status;
pub use system_health::run_system_health;
pub use traceroute::run_traceroute;
pub use tunnel::run_tunnel;
pub use whitelist::run_whitelist;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Once;
    use std::time::Duration;

    use pvs_link_core::{ClientConfig, GatewayClient};

    use crate::output::{JsonOutput, TableOutput};

    pub(crate) fn client_for(server: &mockito::ServerGuard) -> GatewayClient {
        GatewayClient::new(ClientConfig {
            base_url: server.url(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    pub(crate) fn json_output() -> JsonOutput {
        JsonOutput::new()
    }

    /// Table formatter with colours disabled for the whole test binary.
    ///
    /// The override is process wide, so it is only ever set to one value.
    pub(crate) fn table_output() -> TableOutput {
        static PLAIN: Once = Once::new();
        PLAIN.call_once(|| colored::control::set_override(false));
        TableOutput::new()
    }
}
