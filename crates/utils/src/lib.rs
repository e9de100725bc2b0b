use rand::Rng;

/// Generates a random alphanumeric secret of the given length
pub fn create_random_secret(secret_length: usize) -> String {
    let mut rng = rand::thread_rng();
    std::iter::repeat(())
        .map(|()| rng.sample(rand::distributions::Alphanumeric))
        .map(char::from)
        .take(secret_length)
        .collect()
}
