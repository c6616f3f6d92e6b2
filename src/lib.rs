pub mod shared {
    pub mod config;
    pub mod infrastructure {
        pub mod http_gateway;
    }
}

pub mod modules {
    pub mod time_sync {
        pub mod core {
            pub mod harvest_time_entry;
            pub mod map_to_worklog;
            pub mod ports;
            pub mod tempo_worklog;
        }
        pub mod use_cases {
            pub mod copy_time_entries {
                pub mod command;
                pub mod handler;
                pub mod report;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod harvest_api;
                pub mod in_memory;
                pub mod tempo_api;
            }
        }
    }
}

pub mod shell;
