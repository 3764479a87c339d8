//! Query Builder Tests Module
