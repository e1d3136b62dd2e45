pub mod env_var {
    use lazy_static::lazy_static;

    lazy_static! {
        static ref ENV_VAR: EnvVar = load_env();
    }

    #[derive(Debug, Clone)]
    pub struct EnvVar {
        pub port: u16,
        pub seed_users: usize,
    }

    macro_rules! get_env {
        ($env:literal) => {
            std::env::var($env).expect(concat!("Missing env var ", $env))
        };
        ($env:literal, $default:literal) => {
            std::env::var($env).unwrap_or_else(|_| String::from($default))
        };
    }

    fn load_env() -> EnvVar {
        let port: u16 = get_env!("PORT", "8080").parse().expect("Invalid PORT");
        let seed_users: usize = get_env!("SEED_USERS", "0")
            .parse()
            .expect("Invalid SEED_USERS");

        EnvVar { port, seed_users }
    }

    pub fn get() -> &'static EnvVar {
        &ENV_VAR
    }
}
