pub mod application {
    pub mod catalog {
        pub mod get_products;
        pub mod search;
    }
    pub mod cart {
        pub mod add;
        pub mod decrement;
        pub mod get;
        pub mod increment;
        pub mod remove;
    }
    pub mod favorite {
        pub mod toggle;
    }
    pub mod session {
        pub mod detail;
        pub mod dismiss_alert;
        pub mod load;
        pub mod snapshot;
        pub mod toggle_overlay;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod get_products;
            pub mod search;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod decrement;
            pub mod get;
            pub mod increment;
            pub mod remove;
        }
    }
    pub mod favorite {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod toggle;
        }
    }
    pub mod session {
        pub mod detail;
        pub mod errors;
        pub mod model;
        pub mod search;
        pub mod use_cases {
            pub mod detail;
            pub mod dismiss_alert;
            pub mod load;
            pub mod snapshot;
            pub mod toggle_overlay;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support;
