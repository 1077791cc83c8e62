mod topic_tests;
