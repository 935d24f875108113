pub use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub use anyhow::Context;
pub use async_trait::async_trait;
pub use derive_new::new;
pub use dotenv::dotenv;
pub use getset::{CopyGetters, Getters};
pub use log::{error, info, warn};
pub use serde::{Deserialize, de::DeserializeOwned};
