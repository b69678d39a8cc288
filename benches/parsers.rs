use divan::bench;
use listparse::{Parser, digit, integer, literal, separate_by, word, xmany};

fn main() {
    divan::main();
}

#[bench]
fn bench_word() {
    word.run("abcdefghijklmnop;");
}

#[bench]
fn bench_integer_many() {
    integer.run("1234567890123456;");
}

#[bench]
fn bench_integer_xmany() {
    xmany(digit).run("1234567890123456;");
}

#[bench]
fn bench_separate_by() {
    separate_by(digit, literal(b',')).run("1,2,3,4,5,6,7,8,9;");
}

#[bench]
fn bench_literal_miss() {
    literal(b'a').run("xbc");
}

#[divan::bench_group]
mod bench_alternation {
    use divan::Bencher;
    use listparse::{Parser, digit, letter};

    #[divan::bench]
    fn bench_or(bencher: Bencher) {
        let alnum = letter.or(digit).many();

        bencher.bench_local(move || alnum.run("abc123def456;").len());
    }

    #[divan::bench]
    fn bench_xor(bencher: Bencher) {
        let alnum = letter.xor(digit).xmany();

        bencher.bench_local(move || alnum.run("abc123def456;").len());
    }
}
