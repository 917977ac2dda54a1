use criterion::criterion_main;

mod combinators;
mod retry;

// Main benchmark groups based on available features
#[cfg(all(feature = "std", feature = "serde"))]
criterion_main!(
    core::core_benches,
    combinators::combinator_benches,
    retry::retry_benches,
    zip::zip_benches,
    scoped::scoped_benches,
    conversions::conversion_benches,
    scenarios::real_world_benches,
    features::std_benches,
    features::serde_benches,
);

#[cfg(all(feature = "std", not(feature = "serde")))]
criterion_main!(
    core::core_benches,
    combinators::combinator_benches,
    retry::retry_benches,
    zip::zip_benches,
    scoped::scoped_benches,
    conversions::conversion_benches,
    scenarios::real_world_benches,
    features::std_benches,
);

#[cfg(all(feature = "serde", not(feature = "std")))]
criterion_main!(
    core::core_benches,
    combinators::combinator_benches,
    retry::retry_benches,
    zip::zip_benches,
    scoped::scoped_benches,
    conversions::conversion_benches,
    scenarios::real_world_benches,
    features::serde_benches,
);

#[cfg(not(any(feature = "std", feature = "serde")))]
criterion_main!(
    core::core_benches,
    combinators::combinator_benches,
    retry::retry_benches,
    zip::zip_benches,
    scoped::scoped_benches,
    conversions::conversion_benches,
    scenarios::real_world_benches,
);
