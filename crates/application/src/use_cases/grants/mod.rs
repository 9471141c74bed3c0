mod extend_grant;
mod unblock_site;

pub use extend_grant::ExtendGrantUseCase;
pub use unblock_site::UnblockSiteUseCase;
