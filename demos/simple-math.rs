extern crate udecimal;

use udecimal::BigDecimal;

fn main() {
    let mut counter: BigDecimal = "999999999999999999999999999999".parse().unwrap();
    counter.incr();
    println!("after increment: {}", counter);

    let a = BigDecimal::from(30u32);
    let b = BigDecimal::from(10u32);
    let result = (&a - &b) * BigDecimal::from(2u32);
    println!("(30 - 10) * 2 = {}", result);

    let product = BigDecimal::from(100u32) * BigDecimal::from(999u32);
    println!("100 * 999 = {}", product);

    let mut shifted: BigDecimal = "123".parse().unwrap();
    shifted <<= 3;
    println!("123 * 10^3 = {}", shifted);
    shifted >>= 5;
    println!("... / 10^5 = {}", shifted);

    // a reversed digit string denotes the same value read back-to-front
    let reversed = BigDecimal::from_digit_str("521", true).unwrap();
    println!("'521' reversed is {}", reversed);
    assert_eq!(reversed, BigDecimal::from(125u32));
}
