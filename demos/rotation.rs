use cyclic_bytes::{ByteOp, CyclicReadBuffer, rotate, rotated};

fn to_binary_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:08b}")).collect()
}

fn main() {
    let mut bytes = [0x81u8, 24, 7];
    println!("rotated 0:  {}", to_binary_string(&bytes));

    println!("rotating 1, 9 times");
    for _ in 0..9 {
        rotate(&mut bytes, 1);
        println!("rotated 1:  {}", to_binary_string(&bytes));
    }

    println!("rotating -9, 1 time");
    rotate(&mut bytes, -9);
    println!("rotated -9: {}", to_binary_string(&bytes));

    println!("rotating 9, 1 time");
    println!("rotated 9:  {}", to_binary_string(rotated(&mut bytes, 9)));

    println!("rotating -1, 9 times");
    for _ in 0..9 {
        rotate(&mut bytes, -1);
        println!("rotated -1: {}", to_binary_string(&bytes));
    }

    let key = [0x5Au8, 0xA5];
    let mut buffer = CyclicReadBuffer::new(&key).expect("key is not empty");
    println!("xor with cyclic key {}", to_binary_string(&key));
    buffer.apply_operation(&mut bytes, ByteOp::Xor);
    println!("combined:   {}", to_binary_string(&bytes));
}
