pub mod shared {
    pub mod core {
        pub mod counter;
        pub mod errors;
    }
    pub mod infrastructure {
        pub mod refresh;
        pub mod store;
    }
}

pub mod modules {
    pub mod waitlist {
        pub mod core {
            pub mod email;
            pub mod entry;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod add_waitlist_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod remove_waitlist_entry {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod increment_like {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_waitlist_entries {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod waitlist_in_memory;
                pub mod waitlist_postgres;
            }
        }
    }
    pub mod traffic {
        pub mod core {
            pub mod order;
            pub mod ports;
            pub mod traffic_record;
        }
        pub mod use_cases {
            pub mod record_visit {
                pub mod handler;
                pub mod strategy;
            }
            pub mod list_visits {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod traffic_in_memory;
                pub mod traffic_postgres;
            }
        }
    }
}

pub mod shell;
