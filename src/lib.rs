pub mod shared {
    pub mod core {
        pub mod identity;
    }
    pub mod infrastructure {
        pub mod event_bus;
    }
}

pub mod modules {
    pub mod greetings {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod state;
        }
        pub mod use_cases {
            pub mod set_greeting {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_greeting {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod store;
    }
}

pub mod shell;
