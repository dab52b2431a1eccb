pub mod modules{
    pub mod base;
    pub mod univariate_poly;
    pub mod pretty;
    pub mod input;
    pub mod reconstruct;
    pub mod report;
}
