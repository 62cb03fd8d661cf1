//! Legendre polynomials

pub trait Legendre {
    /// Evaluates the Legendre polynomial P_l(x), using Bonnet's
    /// recursion relation
    fn legendre(&self, l: usize) -> f64;
}

impl Legendre for f64 {
    fn legendre(&self, l: usize) -> f64 {
        let x = *self;
        match l {
            0 => 1.0,
            1 => x,
            _ => {
                let (_, p) = (2..=l).fold((1.0, x), |(p0, p1), n| {
                    let n = n as f64;
                    let p2 = ((2.0 * n - 1.0) * x * p1 - (n - 1.0) * p0) / n;
                    (p1, p2)
                });
                p
            }
        }
    }
}
