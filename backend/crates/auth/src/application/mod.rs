pub mod authenticate;
pub mod config;
pub mod login;
pub mod logout;
pub mod register;
pub mod token;

pub use authenticate::AuthenticateTokenUseCase;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use logout::LogoutUseCase;
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use token::TokenIssuer;
