pub mod auth;
pub mod health;
pub mod notification;
pub mod task;

pub use auth::{LoginInput, LoginResponse, MessageResponse, VerifyTokenInput, VerifyTokenResponse};
pub use health::HealthResponse;
pub use notification::{Notification, NotificationList, NotifyInput, NotifyResponse};
pub use task::{CreateTaskInput, Task, TaskMutationResponse};
