use rpn2tex::{convert, Error, LexError, ParseError};

macro_rules! define_tests {
    ($($name:ident: $input:expr => $expected:expr,)*) => {$(
        #[test]
        fn $name() {
            assert_eq!(convert($input).unwrap(), $expected);
        }
    )*};
}

macro_rules! define_error_tests {
    ($($name:ident: $input:expr => $Kind:ident($message:expr, $line:expr, $column:expr),)*) => {$(
        #[test]
        fn $name() {
            assert_eq!(
                convert($input).unwrap_err(),
                Error::from($Kind::new($message, $line, $column)),
            );
        }
    )*};
}

define_tests! {
    addition: "5 3 +" => "$5 + 3$",
    multiplication: "4 7 *" => r"$4 \times 7$",
    grouped_sum_times: "5 3 + 2 *" => r"$( 5 + 3 ) \times 2$",
    product_plus: "5 3 * 2 +" => r"$5 \times 3 + 2$",
    chained_subtraction: "5 3 - 2 -" => "$5 - 3 - 2$",
    both_sides_grouped: "1 2 + 3 4 + *" => r"$( 1 + 2 ) \times ( 3 + 4 )$",
    mixed_division: "10 2 / 3 + 4 *" => r"$( 10 \div 2 + 3 ) \times 4$",
    chained_addition: "1 2 + 3 + 4 +" => "$1 + 2 + 3 + 4$",
    chained_division: "100 10 / 5 / 2 /" => r"$100 \div 10 \div 5 \div 2$",
    right_nested_subtraction: "5 3 2 - -" => "$5 - ( 3 - 2 )$",
    right_nested_division: "8 4 2 / /" => r"$8 \div ( 4 \div 2 )$",
    right_nested_addition: "1 2 3 + +" => "$1 + 2 + 3$",
    product_of_quotients: "6 2 / 9 3 / *" => r"$6 \div 2 \times ( 9 \div 3 )$",
    negative_numbers: "-5 -3 +" => "$-5 + -3$",
    decimals: "3.14 2 *" => r"$3.14 \times 2$",
    trailing_dot: "5." => "$5.$",
    leading_zeros: "007" => "$007$",
    multiline_input: "5\n3\n+" => "$5 + 3$",
    surrounding_whitespace: "  5   3  +  \n" => "$5 + 3$",
}

define_error_tests! {
    caret_operator: "2 3 ^" => LexError("Unexpected character '^'", 1, 5),
    letter_on_second_line: "1 2 +\nx" => LexError("Unexpected character 'x'", 2, 1),
    missing_operand: "5 +" => ParseError("Operator '+' requires two operands", 1, 3),
    lone_minus: "-" => ParseError("Operator '-' requires two operands", 1, 1),
    empty_input: "" => ParseError("Empty expression", 1, 1),
    blank_input: "   " => ParseError("Empty expression", 1, 4),
    leftover_operands: "5 3 2 +" => ParseError("Invalid RPN: 2 values remain on stack (expected 1)", 1, 8),
    negative_without_operator: "5 -3" => ParseError("Invalid RPN: 2 values remain on stack (expected 1)", 1, 5),
}
