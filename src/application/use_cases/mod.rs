/// Use cases module containing application business logic orchestration
mod compare_scans;

pub use compare_scans::CompareScansUseCase;
